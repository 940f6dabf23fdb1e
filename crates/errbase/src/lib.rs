//! Building blocks for custom error types.
//!
//! This crate provides [`ErrBase`], a value that custom errors contain to gain a
//! message, an optional wrapped cause and the location where the error was
//! created.
//!
//! # Error Anatomy
//!
//! - [`ErrBase::build`] and [`ErrBase::wrap`] capture the caller's [`Frame`] via `#[track_caller]`
//! - `Display` is the one-line form: `message` or `message: cause`
//! - `Debug` is the detailed form: each link's message and frame, down the chain
//! - [`find`] walks `source()` links to recover a concrete error type
//!
//! # Examples
//!
//! ```
//! use errbase::{embed, find, ErrBase};
//!
//! #[derive(derive_more::AsRef)]
//! struct ImportError {
//!     #[as_ref]
//!     base: ErrBase,
//!     path: String,
//! }
//!
//! embed!(ImportError);
//!
//! fn import(path: &str) -> Result<(), Box<dyn std::error::Error>> {
//!     let io = std::io::Error::from(std::io::ErrorKind::NotFound);
//!     Err(ImportError {
//!         base: ErrBase::wrap("failed to import", io),
//!         path: path.to_string(),
//!     })?
//! }
//!
//! let err = import("books.csv").unwrap_err();
//! assert_eq!(err.to_string(), "failed to import: entity not found");
//! assert_eq!(find::<ImportError>(&*err).map(|e| e.path.as_str()), Some("books.csv"));
//! println!("{:?}", err);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod base;
mod chain;
mod format;
mod frame;
mod report;
mod traced;

pub use base::ErrBase;
pub use chain::{Chain, chain, find, root_cause};
pub use format::{FormatError, Printer, format_detail};
pub use frame::Frame;
pub use report::log_error;
pub use traced::Traced;
