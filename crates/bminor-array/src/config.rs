//! Array allocation parameters.

/// Configuration for header-prefixed array creation.
///
/// Checked before any memory is requested, so an oversized request fails
/// with a typed error instead of reaching the global allocator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Maximum number of elements a single array may hold.
    ///
    /// Default: `usize::MAX` (no ceiling beyond layout and memory limits).
    pub max_elements: usize,
}

impl ArrayConfig {
    /// Default element ceiling: unlimited.
    pub const DEFAULT_MAX_ELEMENTS: usize = usize::MAX;

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            max_elements: Self::DEFAULT_MAX_ELEMENTS,
        }
    }

    /// Create a config that rejects arrays longer than `max_elements`.
    pub const fn with_max_elements(max_elements: usize) -> Self {
        Self { max_elements }
    }

    /// Whether an array of `len` elements is permitted.
    pub fn permits(&self, len: usize) -> bool {
        len <= self.max_elements
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
