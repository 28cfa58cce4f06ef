use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{WORLD_MAX_Y, WORLD_MIN_Y};
use crate::footprint::Footprint;

/// A registered greenhouse: an X/Z footprint plus an inclusive vertical band.
///
/// Greenhouses are plain values. They hold no link to their island; the
/// registry re-derives ownership from `location` whenever it needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GreenhouseDef")]
pub struct Greenhouse {
    /// Anchor block used to resolve the owning island. `None` means the
    /// greenhouse was never anchored and cannot be registered.
    pub location: Option<IVec3>,
    pub footprint: Footprint,
    /// Name of the climate recipe this greenhouse was built with.
    pub biome_recipe: String,
    floor_height: i32,
    ceiling_height: i32,
}

/// Serialized form of [`Greenhouse`], validated through [`Greenhouse::new`]
/// on load.
#[derive(Deserialize)]
struct GreenhouseDef {
    location: Option<IVec3>,
    footprint: Footprint,
    #[serde(default)]
    biome_recipe: String,
    floor_height: i32,
    ceiling_height: i32,
}

impl TryFrom<GreenhouseDef> for Greenhouse {
    type Error = &'static str;

    fn try_from(def: GreenhouseDef) -> Result<Self, Self::Error> {
        let greenhouse = Greenhouse::new(
            def.location,
            def.footprint,
            def.floor_height,
            def.ceiling_height,
        )?;
        Ok(greenhouse.with_biome_recipe(def.biome_recipe))
    }
}

impl Greenhouse {
    /// Create a greenhouse, validating its vertical band.
    ///
    /// Returns `Err(reason)` if the floor is above the ceiling or either
    /// height lies outside `WORLD_MIN_Y..=WORLD_MAX_Y`.
    pub fn new(
        location: Option<IVec3>,
        footprint: Footprint,
        floor_height: i32,
        ceiling_height: i32,
    ) -> Result<Self, &'static str> {
        if floor_height > ceiling_height {
            return Err("Floor height is above ceiling height");
        }
        if floor_height < WORLD_MIN_Y || ceiling_height > WORLD_MAX_Y {
            return Err("Greenhouse height is outside the world");
        }
        Ok(Self {
            location,
            footprint,
            biome_recipe: String::new(),
            floor_height,
            ceiling_height,
        })
    }

    pub fn with_biome_recipe(mut self, recipe: impl Into<String>) -> Self {
        self.biome_recipe = recipe.into();
        self
    }

    pub fn floor_height(&self) -> i32 {
        self.floor_height
    }

    pub fn ceiling_height(&self) -> i32 {
        self.ceiling_height
    }

    /// Number of block layers in the vertical band.
    pub fn height(&self) -> i32 {
        self.ceiling_height - self.floor_height + 1
    }

    /// Whether `y` lies in `[floor_height, ceiling_height]`.
    pub fn spans_height(&self, y: i32) -> bool {
        y >= self.floor_height && y <= self.ceiling_height
    }

    /// Whether the block at `pos` lies inside the greenhouse volume.
    pub fn contains(&self, pos: IVec3) -> bool {
        self.footprint.contains(pos.x, pos.z) && self.spans_height(pos.y)
    }
}
