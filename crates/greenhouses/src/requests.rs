//! Event-driven registration for callers inside the ECS.
//!
//! Block-interaction handlers and commands can send [`RegisterGreenhouse`] /
//! [`UnregisterGreenhouse`] instead of borrowing the registry themselves.
//! Results come back as [`GreenhouseRegistered`] / [`GreenhouseUnregistered`].

use bevy::prelude::*;

use crate::greenhouse::Greenhouse;
use crate::islands::{IslandClaims, IslandLookup};
use crate::params::GreenhouseParams;
use crate::registry::{AddResult, GreenhouseRegistry};

// =============================================================================
// Events
// =============================================================================

/// Request to register a greenhouse on the island claiming its anchor.
#[derive(Event, Debug, Clone)]
pub struct RegisterGreenhouse {
    pub greenhouse: Greenhouse,
}

/// Request to remove a previously registered greenhouse.
#[derive(Event, Debug, Clone)]
pub struct UnregisterGreenhouse {
    pub greenhouse: Greenhouse,
}

/// Result of a [`RegisterGreenhouse`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The registry was consulted and answered with this result.
    Added(AddResult),
    /// The island already holds `GreenhouseParams::max_greenhouses_per_island`.
    LimitReached,
}

impl RegistrationOutcome {
    pub fn is_success(self) -> bool {
        self == RegistrationOutcome::Added(AddResult::Success)
    }
}

/// Sent once per [`RegisterGreenhouse`] request, successful or not.
#[derive(Event, Debug, Clone)]
pub struct GreenhouseRegistered {
    pub greenhouse: Greenhouse,
    pub outcome: RegistrationOutcome,
}

/// Sent when an [`UnregisterGreenhouse`] request actually removed something.
#[derive(Event, Debug, Clone)]
pub struct GreenhouseUnregistered {
    pub greenhouse: Greenhouse,
}

// =============================================================================
// Systems
// =============================================================================

/// Apply the per-island limit, then hand the greenhouse to the registry.
pub fn register_with_limit<L: IslandLookup + ?Sized>(
    registry: &mut GreenhouseRegistry,
    islands: &L,
    params: &GreenhouseParams,
    greenhouse: Greenhouse,
) -> RegistrationOutcome {
    let island = greenhouse.location.and_then(|loc| islands.island_at(loc));
    if let Some(island) = island {
        if !params.allows_another(registry.count_for_island(island)) {
            return RegistrationOutcome::LimitReached;
        }
    }
    RegistrationOutcome::Added(registry.add_greenhouse(islands, greenhouse))
}

pub fn handle_register_greenhouse(
    mut requests: EventReader<RegisterGreenhouse>,
    claims: Res<IslandClaims>,
    params: Res<GreenhouseParams>,
    mut registry: ResMut<GreenhouseRegistry>,
    mut registered: EventWriter<GreenhouseRegistered>,
) {
    for request in requests.read() {
        let greenhouse = request.greenhouse.clone();
        let outcome = register_with_limit(&mut registry, &*claims, &params, greenhouse.clone());
        match outcome {
            RegistrationOutcome::Added(AddResult::Success) => debug!(
                "Registered '{}' greenhouse at {:?}",
                greenhouse.biome_recipe, greenhouse.location
            ),
            RegistrationOutcome::Added(AddResult::MissingLocation) => warn!(
                "Rejected '{}' greenhouse: it has no anchor location",
                greenhouse.biome_recipe
            ),
            RegistrationOutcome::Added(result) => debug!(
                "Rejected greenhouse at {:?}: {}",
                greenhouse.location,
                result.name()
            ),
            RegistrationOutcome::LimitReached => debug!(
                "Rejected greenhouse at {:?}: island greenhouse limit reached",
                greenhouse.location
            ),
        }
        registered.send(GreenhouseRegistered {
            greenhouse,
            outcome,
        });
    }
}

pub fn handle_unregister_greenhouse(
    mut requests: EventReader<UnregisterGreenhouse>,
    claims: Res<IslandClaims>,
    mut registry: ResMut<GreenhouseRegistry>,
    mut unregistered: EventWriter<GreenhouseUnregistered>,
) {
    for request in requests.read() {
        if registry.remove_greenhouse(&*claims, &request.greenhouse) {
            debug!("Unregistered greenhouse at {:?}", request.greenhouse.location);
            unregistered.send(GreenhouseUnregistered {
                greenhouse: request.greenhouse.clone(),
            });
        }
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct GreenhouseRequestsPlugin;

impl Plugin for GreenhouseRequestsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GreenhouseRegistry>()
            .init_resource::<IslandClaims>()
            .init_resource::<GreenhouseParams>()
            .add_event::<RegisterGreenhouse>()
            .add_event::<UnregisterGreenhouse>()
            .add_event::<GreenhouseRegistered>()
            .add_event::<GreenhouseUnregistered>()
            .add_systems(
                Update,
                (handle_register_greenhouse, handle_unregister_greenhouse)
                    .chain()
                    .in_set(crate::GreenhouseSet::Requests),
            );
    }
}

// =============================================================================
// Tests
// =============================================================================
