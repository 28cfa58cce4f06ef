/// Outcome of [`GreenhouseRegistry::add_greenhouse`](super::GreenhouseRegistry::add_greenhouse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddResult {
    /// Registered on the island that claims its anchor.
    Success,
    /// Footprint intersects a greenhouse already registered on that island.
    FailOverlapping,
    /// No island claims the anchor location.
    FailNoIsland,
    /// The greenhouse has no anchor location.
    MissingLocation,
}

impl AddResult {
    pub fn is_success(self) -> bool {
        self == AddResult::Success
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::FailOverlapping => "overlapping",
            Self::FailNoIsland => "no island",
            Self::MissingLocation => "missing location",
        }
    }
}
