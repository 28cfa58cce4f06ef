//! Island ownership lookup.
//!
//! Islands belong to the host's land-claim system. The registry only needs to
//! ask "which island claims this block?", expressed by [`IslandLookup`].
//! [`IslandClaims`] is a ready-made implementation the host keeps in sync
//! with its own claims; any other type (or a plain closure) works too.

use bevy::prelude::*;

use crate::config::DEFAULT_ISLAND_PROTECTION_RANGE;
use crate::footprint::BlockRect;

/// Resolves the island claiming a world position.
pub trait IslandLookup {
    fn island_at(&self, pos: IVec3) -> Option<Entity>;
}

impl<F> IslandLookup for F
where
    F: Fn(IVec3) -> Option<Entity>,
{
    fn island_at(&self, pos: IVec3) -> Option<Entity> {
        self(pos)
    }
}

/// One island's claimed area. Claims cover the full world height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslandClaim {
    pub island: Entity,
    pub area: BlockRect,
}

/// Island claims keyed by island entity, checked in claim order.
#[derive(Resource, Debug, Default)]
pub struct IslandClaims {
    claims: Vec<IslandClaim>,
}

impl IslandClaims {
    /// Claim `area` for `island`, replacing any earlier claim it held.
    pub fn claim(&mut self, island: Entity, area: BlockRect) {
        match self.claims.iter_mut().find(|c| c.island == island) {
            Some(existing) => existing.area = area,
            None => self.claims.push(IslandClaim { island, area }),
        }
    }

    /// Claim a square of `range` blocks around `center` (Y is ignored).
    pub fn claim_around(&mut self, island: Entity, center: IVec3, range: i32) {
        self.claim(island, BlockRect::around(center.x, center.z, range));
    }

    /// `claim_around` with [`DEFAULT_ISLAND_PROTECTION_RANGE`].
    pub fn claim_default(&mut self, island: Entity, center: IVec3) {
        self.claim_around(island, center, DEFAULT_ISLAND_PROTECTION_RANGE);
    }

    /// Drop the island's claim. Returns whether a claim existed.
    pub fn release(&mut self, island: Entity) -> bool {
        let before = self.claims.len();
        self.claims.retain(|c| c.island != island);
        self.claims.len() != before
    }

    pub fn claim_of(&self, island: Entity) -> Option<BlockRect> {
        self.claims
            .iter()
            .find(|c| c.island == island)
            .map(|c| c.area)
    }

    pub fn claims(&self) -> &[IslandClaim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

impl IslandLookup for IslandClaims {
    fn island_at(&self, pos: IVec3) -> Option<Entity> {
        self.claims
            .iter()
            .find(|c| c.area.contains(pos.x, pos.z))
            .map(|c| c.island)
    }
}
