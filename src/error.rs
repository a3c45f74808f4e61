use thiserror::Error;

/// Rejected arguments to [`crate::sort_checked`].
///
/// Every variant is an invalid-argument failure; the slice is never touched
/// when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid argument: length {len} is negative")]
    NegativeLength { len: isize },
    #[error("invalid argument: length {len} does not match the {actual} elements of the slice")]
    LengthMismatch { len: isize, actual: usize },
}

impl SortError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SortError::NegativeLength { .. } | SortError::LengthMismatch { .. }
        )
    }
}

/// Checks a separately reported length against the slice it describes.
pub(crate) fn check_len(len: isize, actual: usize) -> Result<(), SortError> {
    let len_usize = usize::try_from(len).map_err(|_| SortError::NegativeLength { len })?;
    if len_usize != actual {
        return Err(SortError::LengthMismatch { len, actual });
    }
    Ok(())
}
