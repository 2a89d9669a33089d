//! Filter to keep recordings in (or out of) a range of release years.

use crate::error::Result;
use crate::traits::{single_input, FilterElement};
use entities::Recording;

/// Keeps recordings whose year falls inside the configured range, both ends
/// inclusive. With `inverse` set, keeps recordings strictly outside it.
///
/// A recording with no year is excluded in both modes: it cannot be placed
/// on either side of the range.
pub struct YearRangeFilter {
    start_year: i32,
    end_year: i32,
    inverse: bool,
}

impl YearRangeFilter {
    /// Create a new YearRangeFilter.
    ///
    /// # Arguments
    /// * `start_year` - First year of the range (inclusive)
    /// * `end_year` - Last year of the range (inclusive)
    /// * `inverse` - Keep recordings outside the range instead
    pub fn new(start_year: i32, end_year: i32, inverse: bool) -> Self {
        Self {
            start_year,
            end_year,
            inverse,
        }
    }
}

impl FilterElement for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn process(&self, inputs: Vec<Vec<Recording>>) -> Result<Vec<Recording>> {
        let recordings = single_input(inputs, self.name())?;

        let filtered: Vec<Recording> = recordings
            .into_iter()
            .filter(|recording| match recording.year {
                Some(year) => {
                    let in_range = year >= self.start_year && year <= self.end_year;
                    if self.inverse { !in_range } else { in_range }
                }
                None => false,
            })
            .collect();

        Ok(filtered)
    }
}
