use bevy::prelude::*;

pub mod config;
pub mod footprint;
pub mod greenhouse;
pub mod islands;
pub mod lifecycle;
pub mod params;
pub mod registry;
pub mod requests;

#[cfg(test)]
pub mod test_harness;

pub use footprint::{BlockRect, Footprint};
pub use greenhouse::Greenhouse;
pub use islands::{IslandClaim, IslandClaims, IslandLookup};
pub use lifecycle::IslandDeleteEvent;
pub use params::GreenhouseParams;
pub use registry::{AddResult, GreenhouseRegistry};
pub use requests::{
    GreenhouseRegistered, GreenhouseUnregistered, RegisterGreenhouse, RegistrationOutcome,
    UnregisterGreenhouse,
};

/// Ordering of greenhouse systems within `Update`.
///
/// Requests run before the deletion cascade, so a greenhouse registered on an
/// island in the same frame the island is deleted does not survive it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GreenhouseSet {
    Requests,
    Lifecycle,
}

/// Installs the registry, island claims, request events and the island
/// deletion cascade.
pub struct GreenhousePlugin;

impl Plugin for GreenhousePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GreenhouseRegistry>()
            .init_resource::<IslandClaims>()
            .init_resource::<GreenhouseParams>()
            .configure_sets(
                Update,
                (GreenhouseSet::Requests, GreenhouseSet::Lifecycle).chain(),
            );

        app.add_plugins((
            requests::GreenhouseRequestsPlugin,
            lifecycle::GreenhouseLifecyclePlugin,
        ));
    }
}
