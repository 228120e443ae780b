/// Result type for arena operations.
pub type ArenaResult<T> = Result<T, ArenaError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while allocating from an arena.
pub enum ArenaError {
    /// The request does not fit in the remaining capacity.
    CapacityExceeded {
        /// Name of the exhausted arena.
        arena:     &'static str,
        /// Number of bytes requested, before rounding.
        requested: usize,
        /// Bytes already in use when the request was made.
        used:      usize,
        /// Total capacity of the arena.
        capacity:  usize,
    },
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { arena,
                                     requested,
                                     used,
                                     capacity, } => write!(f,
                                                           "Error: Out of memory in the {arena} arena: requested {requested} bytes with {used} of {capacity} in use."),
        }
    }
}

impl std::error::Error for ArenaError {}
