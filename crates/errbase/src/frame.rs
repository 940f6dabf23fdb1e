//! Captured call-site locations.

use std::panic::Location;

/// A call site captured when an error was constructed.
///
/// # Examples
///
/// ```
/// use errbase::Frame;
///
/// let frame = Frame::new("src/db.rs", 42, 9);
/// assert_eq!(frame.to_string(), "src/db.rs:42:9");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[display("{}:{}:{}", file, line, column)]
pub struct Frame {
    file: &'static str,
    line: u32,
    column: u32,
}

impl Frame {
    /// Create a frame from explicit coordinates.
    ///
    /// Useful for pinning locations in tests.
    pub const fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }

    /// Capture the location of the caller.
    ///
    /// Inside a `#[track_caller]` function this resolves to that function's
    /// caller instead.
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    /// Source file of the call site.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Line of the call site.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the call site.
    pub fn column(&self) -> u32 {
        self.column
    }
}

impl From<&'static Location<'static>> for Frame {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}
