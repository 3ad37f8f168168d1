//! Per-year period layouts.
//!
//! A calendar year is partitioned into `N` periods (months or seasons). Only
//! leap status changes the partition, so both layouts and their cumulative
//! days-before-period sums are built once at compile time.

/// Period lengths and days-before-period sums for common and leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodTable<const N: usize> {
    lengths: [[u16; N]; 2],
    before:  [[u16; N]; 2],
}

impl<const N: usize> PeriodTable<N> {
    pub const fn new(common: [u16; N], leap: [u16; N]) -> Self {
        Self {
            lengths: [common, leap],
            before:  [cumulative(common), cumulative(leap)],
        }
    }

    /// Number of periods in a year.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Length of a 1-based period.
    pub const fn days_in_period(&self, leap: bool, period: u8) -> u16 {
        self.lengths[leap as usize][period as usize - 1]
    }

    /// Days in the year before the first day of a 1-based period.
    pub const fn days_before_period(&self, leap: bool, period: u8) -> u16 {
        self.before[leap as usize][period as usize - 1]
    }

    /// Total days in the year.
    pub const fn days_in_year(&self, leap: bool) -> u16 {
        let last = N - 1;
        self.before[leap as usize][last] + self.lengths[leap as usize][last]
    }

    /// Finds the period holding a zero-based day of year.
    ///
    /// Upper-bound search over the days-before table: the period is the last
    /// one starting on or before `day_of_year`. Returns the 1-based period and
    /// the zero-based offset of the day inside it.
    pub fn locate(&self, leap: bool, day_of_year: u16) -> (u8, u16) {
        let before = &self.before[leap as usize];
        let period = before.partition_point(|&start| start <= day_of_year);
        debug_assert!(period >= 1, "days-before table must start at zero");
        (period as u8, day_of_year - before[period - 1])
    }
}

const fn cumulative<const N: usize>(lengths: [u16; N]) -> [u16; N] {
    let mut before = [0; N];
    let mut i = 1;
    while i < N {
        before[i] = before[i - 1] + lengths[i - 1];
        i += 1;
    }
    before
}
