//! Emitting error chains as `tracing` events.

use crate::{Traced, chain};

/// Log `err` at `error` level and each of its causes at `debug` level.
///
/// The top-level event carries the message and the captured frame as
/// structured fields; cause events carry their depth in the chain.
///
/// # Examples
///
/// ```
/// use errbase::{log_error, ErrBase};
///
/// let err = ErrBase::wrap("flush failed", "broken pipe");
/// log_error(&err);
/// ```
pub fn log_error<E>(err: &E)
where
    E: Traced + 'static,
{
    let frame = err.frame();
    tracing::error!(
        file = frame.file(),
        line = frame.line(),
        column = frame.column(),
        error = %err,
        "{}",
        err.message()
    );

    for (depth, cause) in chain(err).enumerate().skip(1) {
        tracing::debug!(depth, cause = %cause, "caused by");
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::fmt::MakeWriter;

    use super::*;
    use crate::ErrBase;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buf = self.0.lock().expect("capture lock poisoned");
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("capture lock poisoned")
                .extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_logs(f: impl FnOnce()) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn logs_error_then_each_cause() {
        let err = ErrBase::wrap("outer", ErrBase::wrap("middle", "inner"));
        let output = capture_logs(|| log_error(&err));

        let errors: Vec<&str> = output.lines().filter(|l| l.contains("ERROR")).collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("outer"));
        assert!(errors[0].contains("report.rs"));
        assert!(errors[0].contains(&format!("line={}", err.frame().line())));
        assert!(errors[0].contains("column="));

        let causes: Vec<&str> = output.lines().filter(|l| l.contains("DEBUG")).collect();
        assert_eq!(causes.len(), 2);
        assert!(causes[0].contains("depth=1"));
        assert!(causes[0].contains("middle: inner"));
        assert!(causes[1].contains("depth=2"));
        assert!(causes[1].contains("inner"));
    }

    #[test]
    fn lone_error_logs_no_causes() {
        let err = ErrBase::build("alone");
        let output = capture_logs(|| log_error(&err));

        assert_eq!(output.lines().filter(|l| l.contains("ERROR")).count(), 1);
        assert_eq!(output.lines().filter(|l| l.contains("DEBUG")).count(), 0);
    }
}
