//! The embeddable error core.

use std::{error::Error, fmt, sync::Arc};

use crate::Frame;

type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Message, optional cause and captured call site shared by custom error types.
///
/// Custom errors contain an `ErrBase` field, expose it through
/// `AsRef<ErrBase>` and forward their formatting with [`embed!`](crate::embed).
///
/// # Examples
///
/// ```
/// use errbase::ErrBase;
///
/// let err = ErrBase::wrap("failed to load profile", "connection reset");
/// assert_eq!(err.to_string(), "failed to load profile: connection reset");
/// assert!(format!("{:?}", err).contains("connection reset"));
/// ```
#[derive(Clone)]
pub struct ErrBase {
    message: String,
    cause: Option<Cause>,
    frame: Frame,
}

impl ErrBase {
    /// Create an error without a cause at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use errbase::ErrBase;
    ///
    /// let err = ErrBase::build("test msg");
    /// assert_eq!(err.to_string(), "test msg");
    /// assert!(err.cause().is_none());
    /// ```
    #[track_caller]
    pub fn build(message: impl Into<String>) -> Self {
        Self::build_at(Frame::caller(), message)
    }

    /// Create an error wrapping `cause` at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use errbase::ErrBase;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let err = ErrBase::wrap("failed to save", io);
    /// assert_eq!(err.to_string(), "failed to save: disk full");
    /// ```
    #[track_caller]
    pub fn wrap<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        Self::wrap_at(Frame::caller(), message, cause)
    }

    /// Create an error with a cause that may be absent.
    ///
    /// `None` produces the same value as [`ErrBase::build`].
    #[track_caller]
    pub fn wrap_opt<E>(message: impl Into<String>, cause: Option<E>) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let frame = Frame::caller();
        match cause {
            Some(cause) => Self::wrap_at(frame, message, cause),
            None => Self::build_at(frame, message),
        }
    }

    /// Create an error without a cause at an explicit location.
    pub fn build_at(frame: Frame, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(file = frame.file(), line = frame.line(), %message, "error built");
        Self {
            message,
            cause: None,
            frame,
        }
    }

    /// Create an error wrapping `cause` at an explicit location.
    pub fn wrap_at<E>(frame: Frame, message: impl Into<String>, cause: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        let message = message.into();
        let cause: Cause = Arc::from(cause.into());
        tracing::trace!(
            file = frame.file(),
            line = frame.line(),
            %message,
            cause = %cause,
            "error wrapped"
        );
        Self {
            message,
            cause: Some(cause),
            frame,
        }
    }

    /// The message given at construction, without the cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Where this error was built or wrapped.
    pub fn frame(&self) -> Frame {
        self.frame
    }
}

impl AsRef<ErrBase> for ErrBase {
    fn as_ref(&self) -> &ErrBase {
        self
    }
}

impl fmt::Display for ErrBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.message, cause),
            None => f.write_str(&self.message),
        }
    }
}

impl fmt::Debug for ErrBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format_detail(self, f)
    }
}

impl Error for ErrBase {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}
