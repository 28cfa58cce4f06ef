//! # TestWorld: headless app harness for greenhouse integration tests
//!
//! Wraps a `bevy::app::App` running `MinimalPlugins` + `GreenhousePlugin`, so
//! tests can claim islands, send events, advance frames and inspect the
//! registry without a host server.

use bevy::ecs::event::Events;
use bevy::prelude::*;

use crate::footprint::{BlockRect, Footprint};
use crate::greenhouse::Greenhouse;
use crate::islands::IslandClaims;
use crate::params::GreenhouseParams;
use crate::registry::{AddResult, GreenhouseRegistry};
use crate::GreenhousePlugin;

pub struct TestWorld {
    app: App,
}

impl TestWorld {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(GreenhousePlugin);
        // Run one update so Startup and event buffers are initialised.
        app.update();
        Self { app }
    }

    /// Limit greenhouses per island for request-event registration.
    pub fn with_island_limit(mut self, max: usize) -> Self {
        self.app
            .world_mut()
            .resource_mut::<GreenhouseParams>()
            .max_greenhouses_per_island = Some(max);
        self
    }

    // -----------------------------------------------------------------------
    // Islands
    // -----------------------------------------------------------------------

    /// Spawn an island entity claiming a square of `range` around `(cx, cz)`.
    pub fn spawn_island(&mut self, cx: i32, cz: i32, range: i32) -> Entity {
        let world = self.app.world_mut();
        let island = world.spawn_empty().id();
        world
            .resource_mut::<IslandClaims>()
            .claim(island, BlockRect::around(cx, cz, range));
        island
    }

    // -----------------------------------------------------------------------
    // Greenhouses
    // -----------------------------------------------------------------------

    /// A greenhouse anchored at the min corner of its rectangular footprint.
    pub fn greenhouse(x0: i32, z0: i32, x1: i32, z1: i32, floor: i32, ceiling: i32) -> Greenhouse {
        Greenhouse::new(
            Some(IVec3::new(x0.min(x1), floor, z0.min(z1))),
            Footprint::rect(x0, z0, x1, z1),
            floor,
            ceiling,
        )
        .unwrap()
    }

    /// Register directly through the resource, bypassing events.
    pub fn add(&mut self, greenhouse: Greenhouse) -> AddResult {
        let world = self.app.world_mut();
        world.resource_scope(|world, mut registry: Mut<GreenhouseRegistry>| {
            let claims = world.resource::<IslandClaims>();
            registry.add_greenhouse(claims, greenhouse)
        })
    }

    pub fn get(&self, pos: IVec3) -> Option<Greenhouse> {
        self.registry()
            .get_greenhouse(self.claims(), pos)
            .cloned()
    }

    pub fn in_greenhouse(&self, pos: IVec3) -> bool {
        self.registry().in_greenhouse(self.claims(), pos)
    }

    pub fn is_above(&self, pos: IVec3) -> bool {
        self.registry().is_above_greenhouse(self.claims(), pos)
    }

    // -----------------------------------------------------------------------
    // Frames, events and resources
    // -----------------------------------------------------------------------

    /// Run `n` full app updates.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Take every pending event of type `E`.
    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app
            .world_mut()
            .resource_mut::<Events<E>>()
            .drain()
            .collect()
    }

    pub fn registry(&self) -> &GreenhouseRegistry {
        self.app.world().resource::<GreenhouseRegistry>()
    }

    pub fn claims(&self) -> &IslandClaims {
        self.app.world().resource::<IslandClaims>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}
