//! Filter to remove recordings with unusable metadata.
//!
//! Upstream lookup sometimes returns recordings it could not fully resolve;
//! those make for blank entries in a rendered playlist.

use crate::error::Result;
use crate::traits::{single_input, FilterElement};
use entities::Recording;

/// Removes recordings with no name, or with an artist that has no name.
///
/// A recording with no artist at all is kept: only a present-but-nameless
/// artist counts as broken metadata.
pub struct EmptyMetadataFilter;

impl FilterElement for EmptyMetadataFilter {
    fn name(&self) -> &str {
        "EmptyMetadataFilter"
    }

    fn process(&self, inputs: Vec<Vec<Recording>>) -> Result<Vec<Recording>> {
        let recordings = single_input(inputs, self.name())?;

        let filtered: Vec<Recording> = recordings
            .into_iter()
            .filter(|recording| {
                let nameless_artist = recording
                    .artist
                    .as_ref()
                    .is_some_and(|artist| artist.name.is_none());
                if recording.name.is_none() || nameless_artist {
                    tracing::debug!(
                        "recording {} has no usable metadata, filtering",
                        recording.mbid
                    );
                    false
                } else {
                    true
                }
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::Artist;

    #[test]
    fn test_nameless_recording_is_removed() {
        let filter = EmptyMetadataFilter;

        let recordings = vec![
            Recording::new("a"),
            Recording::new("b").with_name("Heroes"),
        ];
        let filtered = filter.process(vec![recordings]).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].mbid, "b");
    }

    #[test]
    fn test_nameless_artist_is_removed() {
        let filter = EmptyMetadataFilter;

        let recordings = vec![Recording::new("a")
            .with_name("Heroes")
            .with_artist(Artist::new().with_credit_id(956))];
        let filtered = filter.process(vec![recordings]).unwrap();

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_named_recording_without_artist_is_kept() {
        let filter = EmptyMetadataFilter;

        let recordings = vec![Recording::new("a").with_name("Heroes")];
        let filtered = filter.process(vec![recordings]).unwrap();

        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_fully_resolved_recording_is_kept() {
        let filter = EmptyMetadataFilter;

        let recordings = vec![Recording::new("a")
            .with_name("Heroes")
            .with_artist(Artist::new().with_credit_id(956).with_name("David Bowie"))];
        let filtered = filter.process(vec![recordings]).unwrap();

        assert_eq!(filtered.len(), 1);
    }
}
