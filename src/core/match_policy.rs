/*-------------------------------------------------------------------------------------------------
  Match Policy
-------------------------------------------------------------------------------------------------*/

/// Policy applied when more than one service tag in the dataset has the requested name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Use the first matching service tag, in dataset order, and warn about the rest.
    #[default]
    FirstMatch,

    /// Treat multiple matches as an error.
    ErrorOnAmbiguity,
}
