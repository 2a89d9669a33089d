//! Filter to collapse consecutive repeats of the same recording.

use crate::error::Result;
use crate::traits::{single_input, FilterElement};
use entities::Recording;

/// Removes a recording when its mbid equals that of the immediately
/// preceding input element.
///
/// A run of equal recordings collapses to one, but duplicates separated by
/// a different recording survive: A, A, A, B, B, A, C becomes A, B, A, C.
/// Global de-duplication is DuplicateRecordingFilter's job.
pub struct ConsecutiveRecordingFilter;

impl FilterElement for ConsecutiveRecordingFilter {
    fn name(&self) -> &str {
        "ConsecutiveRecordingFilter"
    }

    fn process(&self, inputs: Vec<Vec<Recording>>) -> Result<Vec<Recording>> {
        let recordings = single_input(inputs, self.name())?;

        let mut output = Vec::with_capacity(recordings.len());
        // Compared against the previous input element, not the previous
        // surviving one.
        let mut last_mbid: Option<String> = None;
        for recording in recordings {
            let is_repeat = last_mbid.as_deref() == Some(recording.mbid.as_str());
            last_mbid = Some(recording.mbid.clone());
            if !is_repeat {
                output.push(recording);
            }
        }

        Ok(output)
    }
}
