//! Runtime-tunable greenhouse rules.
//!
//! Read by the request-event handlers. Direct calls to
//! [`GreenhouseRegistry`](crate::registry::GreenhouseRegistry) are not
//! affected, so the registry contract stays the same regardless of server
//! settings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreenhouseParams {
    /// Maximum greenhouses one island may hold. `None` = unlimited.
    pub max_greenhouses_per_island: Option<usize>,
}

impl GreenhouseParams {
    /// Whether an island already holding `count` greenhouses may take another.
    pub fn allows_another(&self, count: usize) -> bool {
        self.max_greenhouses_per_island
            .map_or(true, |max| count < max)
    }
}
