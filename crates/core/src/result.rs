//! Result type definition and extension traits for Railway-Oriented Programming.

use crate::error::Error;

/// The standard Result type for tracker operations.
///
/// # Examples
///
/// ```
/// use tracker_core::{Result, Track};
///
/// fn last_offset(count: usize) -> Result<u32> {
///     let track = Track::new(count)?;
///     Ok(track.last_offset())
/// }
///
/// assert_eq!(last_offset(4), Ok(99));
/// assert!(last_offset(1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for observing failures without consuming the Result.
pub trait ResultExt<T> {
    /// Inspect the error without consuming the Result.
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn inspect_error<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_error_sees_error_only() {
        let mut seen = Vec::new();
        let ok: Result<i32> = Ok(1);
        let _ = ok.inspect_error(|e| seen.push(e.to_string()));
        assert!(seen.is_empty());

        let err: Result<i32> = Err(Error::mount_failed("detached"));
        let _ = err.inspect_error(|e| seen.push(e.to_string()));
        assert_eq!(seen, vec!["failed to mount tracker: detached".to_string()]);
    }
}
