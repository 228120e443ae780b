/// Bump allocation over a fixed byte budget.
///
/// An [`Arena`](bump::Arena) hands out sequential, zero-initialized regions
/// of one pre-sized buffer and reclaims all of them at once with `reset`.
/// Nothing is ever freed individually.
///
/// # Responsibilities
/// - Round every request up to an 8-byte multiple and keep `used <= capacity`.
/// - Report exhaustion as an explicit error that leaves the arena untouched.
/// - Store NUL-terminated text for lexemes and line buffers.
pub mod bump;
/// Handles to allocated byte ranges.
///
/// A [`Region`](region::Region) is only meaningful for the arena that
/// produced it, and only until that arena is reset.
pub mod region;

pub use bump::{ALIGNMENT, Arena};
pub use region::Region;
