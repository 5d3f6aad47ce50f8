//! Horizontal track layout
//!
//! Checkpoints are spaced by a whole-percent increment of
//! `floor(100 / (count - 1))`, starting at 0. Offsets are not stretched to
//! reach 100: with 4 checkpoints the increment is 33 and the last offset is 99.

use crate::error::Error;
use crate::result::Result;

/// Minimum number of checkpoints a track can lay out
pub const MIN_CHECKPOINTS: usize = 2;

/// Full track width in percent
pub const TRACK_WIDTH: u32 = 100;

/// Layout of `count` checkpoints along the track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    count: usize,
    increment: u32,
}

impl Track {
    /// Compute the layout for `count` checkpoints.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `count` is below [`MIN_CHECKPOINTS`];
    /// the increment is undefined for 0 or 1 checkpoints.
    pub fn new(count: usize) -> Result<Self> {
        if count < MIN_CHECKPOINTS {
            return Err(Error::invalid_input(format!(
                "a journey needs at least {MIN_CHECKPOINTS} checkpoints, got {count}"
            )));
        }

        let gaps = count.saturating_sub(1);
        // More than 100 gaps rounds the increment down to 0
        let increment = u32::try_from(gaps)
            .ok()
            .and_then(|gaps| TRACK_WIDTH.checked_div(gaps))
            .unwrap_or(0);

        Ok(Self { count, increment })
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whole-percent distance between neighbouring checkpoints
    #[must_use]
    pub const fn increment(&self) -> u32 {
        self.increment
    }

    /// Left offset in percent of the checkpoint at `index`.
    ///
    /// Saturates instead of overflowing for indices past the end of the track.
    #[must_use]
    pub fn offset(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.increment)
    }

    /// Offset of the last checkpoint
    #[must_use]
    pub fn last_offset(&self) -> u32 {
        self.offset(self.count.saturating_sub(1))
    }

    /// How far the last checkpoint falls short of the track end
    #[must_use]
    pub fn drift(&self) -> u32 {
        TRACK_WIDTH.saturating_sub(self.last_offset())
    }

    /// Offsets of every checkpoint, in order
    pub fn offsets(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.count).map(move |index| self.offset(index))
    }

    /// True for the final checkpoint, which gets the terminal label and no arrow
    #[must_use]
    pub const fn is_last(&self, index: usize) -> bool {
        index.saturating_add(1) == self.count
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_empty_journey_is_invalid() {
        let result = Track::new(0);
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn test_single_checkpoint_is_invalid() {
        let result = Track::new(1);
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("at least 2 checkpoints, got 1")
        );
    }

    #[test]
    fn test_two_checkpoints_span_the_track() {
        let track = Track::new(2).unwrap();
        assert_eq!(track.increment(), 100);
        assert_eq!(track.offsets().collect::<Vec<_>>(), vec![0, 100]);
        assert_eq!(track.drift(), 0);
    }

    #[test]
    fn test_three_checkpoints() {
        let track = Track::new(3).unwrap();
        assert_eq!(track.offsets().collect::<Vec<_>>(), vec![0, 50, 100]);
    }

    #[test]
    fn test_four_checkpoints_drift_below_100() {
        let track = Track::new(4).unwrap();
        assert_eq!(track.increment(), 33);
        assert_eq!(track.offsets().collect::<Vec<_>>(), vec![0, 33, 66, 99]);
        assert_eq!(track.last_offset(), 99);
        assert_eq!(track.drift(), 1);
    }

    #[test]
    fn test_five_checkpoints() {
        let track = Track::new(5).unwrap();
        assert_eq!(track.offsets().collect::<Vec<_>>(), vec![0, 25, 50, 75, 100]);
    }

    #[test]
    fn test_more_gaps_than_percent_collapses_to_zero() {
        let track = Track::new(102).unwrap();
        assert_eq!(track.increment(), 0);
        assert!(track.offsets().all(|offset| offset == 0));
    }

    #[test]
    fn test_is_last() {
        let track = Track::new(3).unwrap();
        assert!(!track.is_last(0));
        assert!(!track.is_last(1));
        assert!(track.is_last(2));
    }
}
