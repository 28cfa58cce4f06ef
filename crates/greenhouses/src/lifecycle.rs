//! Island deletion cascade.
//!
//! When the host deletes an island, every greenhouse registered on it is
//! discarded so nothing keeps resolving against the dead island. Deletions
//! the host cancelled are ignored. Re-delivering a deletion is harmless.

use bevy::prelude::*;

use crate::registry::GreenhouseRegistry;

/// Sent by the host when an island is permanently removed.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IslandDeleteEvent {
    pub island: Entity,
    /// Set when another handler vetoed the deletion.
    pub cancelled: bool,
}

impl IslandDeleteEvent {
    pub fn new(island: Entity) -> Self {
        Self {
            island,
            cancelled: false,
        }
    }

    pub fn cancelled(island: Entity) -> Self {
        Self {
            island,
            cancelled: true,
        }
    }
}

/// Drops all greenhouses of every island deleted since the last run.
pub fn purge_deleted_island_greenhouses(
    mut events: EventReader<IslandDeleteEvent>,
    mut registry: ResMut<GreenhouseRegistry>,
) {
    for event in events.read() {
        if event.cancelled {
            debug!(
                "Island {:?} deletion was cancelled, keeping its greenhouses",
                event.island
            );
            continue;
        }
        let removed = registry.remove_all_for_island(event.island);
        if removed > 0 {
            info!(
                "Island {:?} deleted: discarded {} greenhouse(s)",
                event.island, removed
            );
        }
    }
}

pub struct GreenhouseLifecyclePlugin;

impl Plugin for GreenhouseLifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GreenhouseRegistry>()
            .add_event::<IslandDeleteEvent>()
            .add_systems(
                Update,
                purge_deleted_island_greenhouses.in_set(crate::GreenhouseSet::Lifecycle),
            );
    }
}
