//! Filter to remove duplicate recordings anywhere in the sequence.

use std::collections::HashSet;

use crate::error::Result;
use crate::traits::{single_input, FilterElement};
use entities::Recording;

/// Removes any recording whose mbid has already appeared earlier in the
/// sequence, keeping the first occurrence and the input order.
pub struct DuplicateRecordingFilter;

impl FilterElement for DuplicateRecordingFilter {
    fn name(&self) -> &str {
        "DuplicateRecordingFilter"
    }

    fn process(&self, inputs: Vec<Vec<Recording>>) -> Result<Vec<Recording>> {
        let recordings = single_input(inputs, self.name())?;

        let mut seen: HashSet<String> = HashSet::new();
        let filtered: Vec<Recording> = recordings
            .into_iter()
            .filter(|recording| seen.insert(recording.mbid.clone()))
            .collect();

        Ok(filtered)
    }
}
