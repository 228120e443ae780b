/// A byte range handed out by an [`Arena`](crate::arena::Arena).
///
/// `len` is the size that was requested, which may be smaller than the
/// rounded amount the arena actually reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    offset: usize,
    len:    usize,
}

impl Region {
    pub(crate) const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset of the region inside its arena.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Number of usable bytes in the region.
    #[must_use]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Returns `true` for a zero-sized region.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// One past the last usable byte.
    #[must_use]
    pub const fn end(self) -> usize {
        self.offset + self.len
    }
}
