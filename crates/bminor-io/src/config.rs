//! I/O adapter configuration.

/// Textual conventions applied by [`Printer`](crate::Printer) and
/// [`Scanner`](crate::Scanner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IoConfig {
    /// Text printed in place of a null string.
    ///
    /// Default: `"(null)"`.
    pub null_placeholder: &'static str,

    /// Flush the output stream after every print call.
    ///
    /// Default: `true`. Generated code interleaves prints with reads, so a
    /// prompt must reach the terminal before the read blocks.
    pub flush_each_write: bool,

    /// Strip a `\r` left in front of the stripped `\n` by line reads.
    ///
    /// Default: `true`.
    pub strip_carriage_return: bool,
}

impl IoConfig {
    /// Default null-string placeholder.
    pub const DEFAULT_NULL_PLACEHOLDER: &'static str = "(null)";

    /// Create a config with default values.
    pub const fn new() -> Self {
        Self {
            null_placeholder: Self::DEFAULT_NULL_PLACEHOLDER,
            flush_each_write: true,
            strip_carriage_return: true,
        }
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self::new()
    }
}
