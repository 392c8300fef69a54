//! Bucket-index to clock-window derivation.

/// The 15-minute window a bucket index denotes, derived statelessly from
/// the index alone: four buckets per hour, `tb / 4` is the hour and
/// `tb % 4` the quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketWindow {
    hour: u32,
    quarter: u8,
}

impl BucketWindow {
    pub fn from_bucket(tb: usize) -> Self {
        Self {
            hour: (tb / 4) as u32,
            quarter: (tb % 4) as u8,
        }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Whether a clock time falls inside this window.
    ///
    /// Quarter boundaries are closed at the top: minute 15 belongs to the
    /// first quarter, 30 to the second, 45 to the third.
    pub fn contains(&self, hour: u32, minute: u32) -> bool {
        if hour != self.hour {
            return false;
        }
        match self.quarter {
            0 => minute <= 15,
            1 => minute > 15 && minute <= 30,
            2 => minute > 30 && minute <= 45,
            _ => minute > 45,
        }
    }
}
