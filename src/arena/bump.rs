use crate::{
    arena::Region,
    error::{ArenaError, arena_error::ArenaResult},
};

/// Every allocation is rounded up to a multiple of this many bytes.
pub const ALIGNMENT: usize = 8;

/// A bump allocator over a fixed-size byte buffer.
///
/// The backing buffer is allocated once and never grows. Each call to
/// [`Arena::allocate`] reserves the next slice of it; [`Arena::reset`] rewinds
/// the bump pointer without wiping the old contents, so every allocation
/// zeroes its own bytes before handing them out.
///
/// Two arenas drive an evaluation: a permanent one holding the line buffers
/// and a transient one holding the lexemes and tree of the current line.
#[derive(Debug)]
pub struct Arena {
    name:   &'static str,
    memory: Vec<u8>,
    used:   usize,
}

impl Arena {
    /// Creates an arena with `capacity` bytes of backing storage.
    ///
    /// The `name` only appears in log records and errors.
    #[must_use]
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self { name,
               memory: vec![0; capacity],
               used: 0 }
    }

    /// Reserves `size` bytes, rounded up to [`ALIGNMENT`].
    ///
    /// The returned region is zero-initialized. When the rounded request does
    /// not fit in the remaining capacity the arena is left unchanged and a
    /// [`ArenaError::CapacityExceeded`] is returned.
    ///
    /// # Example
    /// ```
    /// use calc::arena::Arena;
    ///
    /// let mut arena = Arena::new("scratch", 32);
    /// let region = arena.allocate(5).unwrap();
    ///
    /// assert_eq!(region.len(), 5);
    /// assert_eq!(arena.used(), 8);
    /// assert!(arena.allocate(32).is_err());
    /// assert_eq!(arena.used(), 8);
    /// ```
    pub fn allocate(&mut self, size: usize) -> ArenaResult<Region> {
        let end = size.checked_next_multiple_of(ALIGNMENT)
                      .and_then(|rounded| self.used.checked_add(rounded))
                      .filter(|&end| end <= self.capacity());

        let Some(end) = end else {
            tracing::warn!(arena = self.name,
                           requested = size,
                           used = self.used,
                           capacity = self.capacity(),
                           "arena exhausted");
            return Err(ArenaError::CapacityExceeded { arena:     self.name,
                                                      requested: size,
                                                      used:      self.used,
                                                      capacity:  self.capacity(), });
        };

        let start = self.used;
        self.memory[start..end].fill(0);
        self.used = end;

        Ok(Region::new(start, size))
    }

    /// Copies `text` into a fresh region followed by a NUL terminator.
    ///
    /// The returned region covers the text only; the terminator sits just past
    /// its end.
    pub fn allocate_str(&mut self, text: &str) -> ArenaResult<Region> {
        let region = self.allocate(text.len() + 1)?;
        self.memory[region.offset()..region.offset() + text.len()].copy_from_slice(text.as_bytes());

        Ok(Region::new(region.offset(), text.len()))
    }

    /// Returns the bytes of `region`, or an empty slice when the region does
    /// not lie inside this arena's allocated space.
    #[must_use]
    pub fn bytes(&self, region: Region) -> &[u8] {
        if region.end() > self.used {
            return &[];
        }
        &self.memory[region.offset()..region.end()]
    }

    /// Mutable counterpart of [`Arena::bytes`].
    pub fn bytes_mut(&mut self, region: Region) -> &mut [u8] {
        if region.end() > self.used {
            return &mut [];
        }
        &mut self.memory[region.offset()..region.end()]
    }

    /// Reads `region` as UTF-8 text, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn str(&self, region: Region) -> Option<&str> {
        std::str::from_utf8(self.bytes(region)).ok()
    }

    /// Reads the NUL-terminated text stored at the start of `region`.
    ///
    /// Text without a terminator extends to the end of the region.
    #[must_use]
    pub fn read_terminated(&self, region: Region) -> &str {
        let bytes = self.bytes(region);
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());

        std::str::from_utf8(&bytes[..len]).unwrap_or_default()
    }

    /// Writes `text` into `region` followed by a NUL terminator.
    ///
    /// Text that does not fit is cut at the last character boundary that
    /// leaves room for the terminator. Returns the number of text bytes
    /// written.
    ///
    /// # Example
    /// ```
    /// use calc::arena::Arena;
    ///
    /// let mut arena = Arena::new("lines", 64);
    /// let line = arena.allocate(4).unwrap();
    ///
    /// assert_eq!(arena.write_terminated(line, "12345"), 3);
    /// assert_eq!(arena.read_terminated(line), "123");
    /// ```
    pub fn write_terminated(&mut self, region: Region, text: &str) -> usize {
        let buffer = self.bytes_mut(region);
        let Some(room) = buffer.len().checked_sub(1) else {
            return 0;
        };

        let mut len = text.len().min(room);
        while !text.is_char_boundary(len) {
            len -= 1;
        }

        buffer[..len].copy_from_slice(&text.as_bytes()[..len]);
        buffer[len] = 0;

        len
    }

    /// Releases every allocation at once.
    ///
    /// Old contents stay in the buffer until they are handed out again.
    pub fn reset(&mut self) {
        tracing::trace!(arena = self.name, used = self.used, "arena reset");
        self.used = 0;
    }

    /// Bytes currently reserved.
    #[must_use]
    pub const fn used(&self) -> usize {
        self.used
    }

    /// Total size of the backing buffer.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.memory.len()
    }

    /// Bytes still available for allocation.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.memory.len() - self.used
    }

    /// Name given at construction.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}
