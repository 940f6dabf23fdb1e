//! Detailed (multi-line) rendering of error chains.
//!
//! `Display` gives the one-line form. `Debug` on [`ErrBase`](crate::ErrBase)
//! and on every type passed to [`embed!`](crate::embed) gives the detailed
//! form, one block per link:
//!
//! ```text
//! failed to sync:
//!     src/sync.rs:88:17
//!   - failed to open journal:
//!     src/journal.rs:12:9
//!   - Os { code: 2, kind: NotFound, message: "No such file or directory" }
//! ```

use std::{error::Error, fmt};

use crate::{ErrBase, Frame};

/// Sink handed to [`FormatError::format_error`].
pub struct Printer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b> Printer<'a, 'b> {
    fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f }
    }

    /// Write the message of the current link.
    pub fn print(&mut self, message: impl fmt::Display) -> fmt::Result {
        write!(self.f, "{}", message)
    }

    /// Write the location of the current link on its own indented line.
    pub fn frame(&mut self, frame: Frame) -> fmt::Result {
        write!(self.f, ":\n    {}", frame)
    }
}

/// Errors that render their own detailed block.
///
/// Implemented for every error that exposes an [`ErrBase`] through `AsRef`:
/// the block is the base's message followed by its frame, and the chain
/// continues with the error's `source()`.
pub trait FormatError: Error {
    /// Print this link and return the next one, if the chain continues.
    fn format_error<'a>(
        &'a self,
        p: &mut Printer<'_, '_>,
    ) -> Result<Option<&'a (dyn Error + 'static)>, fmt::Error>;
}

impl<T> FormatError for T
where
    T: Error + AsRef<ErrBase> + ?Sized,
{
    fn format_error<'a>(
        &'a self,
        p: &mut Printer<'_, '_>,
    ) -> Result<Option<&'a (dyn Error + 'static)>, fmt::Error> {
        let base = self.as_ref();
        p.print(base.message())?;
        p.frame(base.frame())?;
        Ok(self.source())
    }
}

/// Write the detailed form of `err` into `f`.
///
/// The next link renders through its own `Debug` implementation, so a cause
/// that embeds [`ErrBase`](crate::ErrBase) continues the chain with its own
/// block.
///
/// # Errors
///
/// Propagates the formatter's error.
pub fn format_detail<E>(err: &E, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    E: FormatError + ?Sized,
{
    let next = err.format_error(&mut Printer::new(f))?;
    match next {
        Some(next) => write!(f, "\n  - {:?}", next),
        None => Ok(()),
    }
}
