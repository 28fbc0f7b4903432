/// One reading of the wall clock, taken once per frame.
///
/// Immutable for the duration of a frame's computation. The fields are
/// assumed to be legal modular quantities; the engine does not check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSample {
    /// Hour on a 12-hour dial, 0-11 (0 and 12 share a marker).
    pub hour12: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl TimeSample {
    /// Build a sample from 24-hour clock components, folding the hour
    /// onto the 12-hour dial.
    pub fn from_hms(hour24: u8, minute: u8, second: u8) -> Self {
        Self {
            hour12: hour24 % 12,
            minute,
            second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_folds_onto_the_twelve_hour_dial() {
        assert_eq!(TimeSample::from_hms(0, 0, 0).hour12, 0);
        assert_eq!(TimeSample::from_hms(12, 0, 0).hour12, 0);
        assert_eq!(TimeSample::from_hms(13, 5, 9).hour12, 1);
        assert_eq!(TimeSample::from_hms(23, 59, 59).hour12, 11);
    }
}
