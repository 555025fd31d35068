//! Timeout classification for errors.

use std::error::Error as StdError;
use std::io;

use tokio::time::error::Elapsed;

use crate::error::Error;

/// Reports whether the error is a timeout.
///
/// The whole `source()` chain is inspected, so a timeout wrapped by another
/// error is still recognized. A link counts as a timeout when it is:
/// - an [`io::Error`] of kind [`io::ErrorKind::TimedOut`],
/// - a tokio [`Elapsed`] from `tokio::time::timeout`,
/// - an [`Error::Timeout`].
pub fn is_timeout(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::TimedOut {
                return true;
            }
        }
        if e.is::<Elapsed>() {
            return true;
        }
        if let Some(Error::Timeout(_)) = e.downcast_ref::<Error>() {
            return true;
        }
        current = e.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::time::Duration;

    #[derive(Debug)]
    struct Wrapped(io::Error);

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "dial failed")
        }
    }

    impl StdError for Wrapped {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_plain_error_is_not_timeout() {
        let err = io::Error::new(io::ErrorKind::Other, "false");
        assert!(!is_timeout(&err));
        assert!(!Error::Config("bad".to_string()).is_timeout());
    }

    #[test]
    fn test_io_timed_out() {
        let err = io::Error::new(io::ErrorKind::TimedOut, "dial tcp: i/o timeout");
        assert!(is_timeout(&err));
        assert!(Error::Io(err).is_timeout());
    }

    #[test]
    fn test_wrapped_timeout() {
        let err = Wrapped(io::Error::from(io::ErrorKind::TimedOut));
        assert!(is_timeout(&err));

        let err = Wrapped(io::Error::from(io::ErrorKind::ConnectionRefused));
        assert!(!is_timeout(&err));
    }

    #[test]
    fn test_crate_timeout_variant() {
        assert!(Error::Timeout("ip addr".to_string()).is_timeout());
    }

    #[tokio::test]
    async fn test_tokio_elapsed() {
        let result = tokio::time::timeout(
            Duration::from_millis(5),
            std::future::pending::<()>(),
        )
        .await;
        let err = result.unwrap_err();
        assert!(is_timeout(&err));
    }
}
