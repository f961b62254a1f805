/// Rule used to order frontier entries that share the same `f`.
///
/// Both rules are deterministic, so repeated searches on the same input
/// expand the same cells in the same order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TieBreak {
    /// Lower `h` first (the entry closer to the goal), then insertion order.
    #[default]
    LowerH,
    /// Insertion order only.
    Fifo,
}

/// Tunables for a [`PathFinder`](crate::PathFinder).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub tie_break: TieBreak,
}

impl SearchConfig {
    /// Set the tie-break rule (builder).
    #[inline]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
