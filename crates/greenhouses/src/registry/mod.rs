//! Per-island greenhouse registry.
//!
//! Maps each island to the greenhouses registered on it and keeps the one
//! structural invariant: footprints of greenhouses on the same island never
//! intersect. Ownership is always resolved through an [`IslandLookup`] from
//! the greenhouse anchor or the queried position; nothing stores a link from
//! a greenhouse back to its island.
//!
//! The registry is a `Resource`, so every mutation goes through `ResMut` (or
//! `&mut self` outside the ECS). An overlap check and the insert that follows
//! it can therefore never interleave with another registration.

mod types;


pub use types::AddResult;

use bevy::prelude::*;
use std::collections::HashMap;

use crate::greenhouse::Greenhouse;
use crate::islands::IslandLookup;

#[derive(Resource, Debug, Default)]
pub struct GreenhouseRegistry {
    greenhouses: HashMap<Entity, Vec<Greenhouse>>,
}

impl GreenhouseRegistry {
    /// Register a greenhouse on the island claiming its anchor.
    ///
    /// Only the greenhouses of that one island are scanned for overlap. A
    /// resolved island gets an (empty) entry even when the add is rejected
    /// as overlapping; an empty entry behaves exactly like a missing one.
    pub fn add_greenhouse<L: IslandLookup + ?Sized>(
        &mut self,
        islands: &L,
        greenhouse: Greenhouse,
    ) -> AddResult {
        let Some(location) = greenhouse.location else {
            return AddResult::MissingLocation;
        };
        let Some(island) = islands.island_at(location) else {
            return AddResult::FailNoIsland;
        };

        let registered = self.greenhouses.entry(island).or_default();
        if registered
            .iter()
            .any(|g| g.footprint.intersects(&greenhouse.footprint))
        {
            return AddResult::FailOverlapping;
        }
        registered.push(greenhouse);
        AddResult::Success
    }

    /// The greenhouse whose volume contains `pos`, if any.
    ///
    /// If several match (only possible if the no-overlap invariant was
    /// bypassed), the earliest registered wins.
    pub fn get_greenhouse<L: IslandLookup + ?Sized>(
        &self,
        islands: &L,
        pos: IVec3,
    ) -> Option<&Greenhouse> {
        self.island_greenhouses(islands, pos)
            .iter()
            .find(|g| g.contains(pos))
    }

    pub fn in_greenhouse<L: IslandLookup + ?Sized>(&self, islands: &L, pos: IVec3) -> bool {
        self.get_greenhouse(islands, pos).is_some()
    }

    /// True if `pos` is above the roof of the greenhouse whose footprint
    /// covers its column. The floor height plays no part.
    pub fn is_above_greenhouse<L: IslandLookup + ?Sized>(&self, islands: &L, pos: IVec3) -> bool {
        self.island_greenhouses(islands, pos)
            .iter()
            .find(|g| g.footprint.contains(pos.x, pos.z))
            .is_some_and(|g| pos.y > g.ceiling_height())
    }

    /// Remove a registered greenhouse (matched by value) from the island
    /// claiming its anchor. Returns whether anything was removed; a missing
    /// island or greenhouse is not an error.
    pub fn remove_greenhouse<L: IslandLookup + ?Sized>(
        &mut self,
        islands: &L,
        greenhouse: &Greenhouse,
    ) -> bool {
        let Some(island) = greenhouse.location.and_then(|loc| islands.island_at(loc)) else {
            return false;
        };
        let Some(registered) = self.greenhouses.get_mut(&island) else {
            return false;
        };
        match registered.iter().position(|g| g == greenhouse) {
            Some(idx) => {
                registered.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Discard every greenhouse on `island`. Returns how many were dropped.
    pub fn remove_all_for_island(&mut self, island: Entity) -> usize {
        self.greenhouses
            .remove(&island)
            .map_or(0, |registered| registered.len())
    }

    /// Snapshot of every registered greenhouse, grouped by island and in
    /// registration order within each island.
    pub fn list_all(&self) -> Vec<Greenhouse> {
        self.greenhouses.values().flatten().cloned().collect()
    }

    pub fn greenhouses_on(&self, island: Entity) -> &[Greenhouse] {
        self.greenhouses
            .get(&island)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn count_for_island(&self, island: Entity) -> usize {
        self.greenhouses_on(island).len()
    }

    /// Total greenhouses across all islands.
    pub fn len(&self) -> usize {
        self.greenhouses.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.greenhouses.values().all(Vec::is_empty)
    }

    /// Islands holding at least one greenhouse.
    pub fn island_count(&self) -> usize {
        self.greenhouses.values().filter(|g| !g.is_empty()).count()
    }

    fn island_greenhouses<L: IslandLookup + ?Sized>(
        &self,
        islands: &L,
        pos: IVec3,
    ) -> &[Greenhouse] {
        match islands.island_at(pos) {
            Some(island) => self.greenhouses_on(island),
            None => &[],
        }
    }
}
