//! The capability shared by every error that embeds an [`ErrBase`].

use std::error::Error;

use crate::{Chain, ErrBase, Frame};

/// An error carrying a message, an optional cause and a captured frame.
///
/// Blanket-implemented for every `Error` that exposes an [`ErrBase`] through
/// `AsRef`, so embedding types never implement it by hand.
///
/// # Examples
///
/// ```
/// use errbase::{ErrBase, Traced};
///
/// let err = ErrBase::wrap("query failed", "timeout");
/// assert_eq!(err.message(), "query failed");
/// assert_eq!(err.wrapped().map(|c| c.to_string()), Some("timeout".into()));
/// ```
pub trait Traced: Error {
    /// The message given at construction, without the cause.
    fn message(&self) -> &str;

    /// The next link of the chain.
    ///
    /// Named apart from the deprecated `Error::cause`, which every error
    /// already has.
    fn wrapped(&self) -> Option<&(dyn Error + 'static)>;

    /// Where the error was built or wrapped.
    fn frame(&self) -> Frame;

    /// This error followed by its causes.
    fn chain(&self) -> Chain<'_>
    where
        Self: Sized + 'static,
    {
        crate::chain(self)
    }
}

impl<T> Traced for T
where
    T: Error + AsRef<ErrBase> + ?Sized,
{
    fn message(&self) -> &str {
        self.as_ref().message()
    }

    fn wrapped(&self) -> Option<&(dyn Error + 'static)> {
        self.source()
    }

    fn frame(&self) -> Frame {
        self.as_ref().frame()
    }
}

/// Implement `Display`, `Debug` and `Error` for types containing an
/// [`ErrBase`].
///
/// Each type must implement `AsRef<ErrBase>`, usually through
/// `#[derive(derive_more::AsRef)]` with `#[as_ref]` on the field.
/// `Display` is the one-line form, `Debug` the detailed form, and `source()`
/// is the wrapped cause.
///
/// # Examples
///
/// ```
/// use errbase::{embed, find, ErrBase};
///
/// #[derive(derive_more::AsRef)]
/// struct QuotaError {
///     #[as_ref]
///     base: ErrBase,
///     limit: u64,
/// }
///
/// embed!(QuotaError);
///
/// let err: Box<dyn std::error::Error> = Box::new(QuotaError {
///     base: ErrBase::build("quota exceeded"),
///     limit: 10,
/// });
///
/// assert_eq!(err.to_string(), "quota exceeded");
/// assert_eq!(find::<QuotaError>(&*err).map(|e| e.limit), Some(10));
/// ```
#[macro_export]
macro_rules! embed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(
                        ::core::convert::AsRef::<$crate::ErrBase>::as_ref(self),
                        f,
                    )
                }
            }

            impl ::core::fmt::Debug for $ty {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    $crate::format_detail(self, f)
                }
            }

            impl ::std::error::Error for $ty {
                fn source(&self) -> ::core::option::Option<&(dyn ::std::error::Error + 'static)> {
                    ::std::error::Error::source(
                        ::core::convert::AsRef::<$crate::ErrBase>::as_ref(self),
                    )
                }
            }
        )+
    };
}
