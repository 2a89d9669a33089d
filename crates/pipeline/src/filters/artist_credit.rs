//! Filter to keep or drop recordings by their artist credit.
//!
//! Used to pin a playlist to a set of artists, or to keep certain
//! artists out of one.

use std::collections::HashSet;

use crate::error::{FilterError, Result};
use crate::traits::{single_input, FilterElement};
use entities::{ArtistCreditId, Recording};

/// Keeps or removes recordings based on a configured set of artist credits.
///
/// ## Algorithm
/// For each recording:
/// 1. If it has no artist or no artist credit id, skip it with a debug
///    diagnostic (soft exclusion, not an error)
/// 2. Otherwise keep it when set membership matches `include`
///
/// Output preserves input order.
pub struct ArtistCreditFilter {
    artist_credit_ids: HashSet<ArtistCreditId>,
    include: bool,
}

impl ArtistCreditFilter {
    /// Create a new ArtistCreditFilter.
    ///
    /// # Arguments
    /// * `artist_credit_ids` - The artist credits to match against
    /// * `include` - When true only matching recordings pass; when false
    ///   only non-matching recordings pass
    pub fn new(artist_credit_ids: &[ArtistCreditId], include: bool) -> Self {
        Self {
            artist_credit_ids: artist_credit_ids.iter().copied().collect(),
            include,
        }
    }
}

impl FilterElement for ArtistCreditFilter {
    fn name(&self) -> &str {
        "ArtistCreditFilter"
    }

    fn process(&self, inputs: Vec<Vec<Recording>>) -> Result<Vec<Recording>> {
        let recordings = single_input(inputs, self.name())?;

        // An empty set with include=true would filter everything; either
        // way it means the caller configured nothing to match against.
        if self.artist_credit_ids.is_empty() {
            return Err(FilterError::DegenerateConfiguration {
                element: self.name().to_string(),
                reason: "the artist credit id set is empty".to_string(),
            });
        }

        let filtered: Vec<Recording> = recordings
            .into_iter()
            .filter(|recording| {
                let Some(credit_id) = recording.artist_credit_id() else {
                    tracing::debug!(
                        "recording {} has no artist credit id, skipping",
                        recording.mbid
                    );
                    return false;
                };
                self.artist_credit_ids.contains(&credit_id) == self.include
            })
            .collect();

        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::Artist;

    fn recording(mbid: &str, credit_id: ArtistCreditId) -> Recording {
        Recording::new(mbid).with_artist(Artist::new().with_credit_id(credit_id))
    }

    #[test]
    fn test_include_keeps_only_listed_credits() {
        let filter = ArtistCreditFilter::new(&[10, 30], true);

        let recordings = vec![
            recording("a", 10),
            recording("b", 20),
            recording("c", 30),
        ];
        let filtered = filter.process(vec![recordings]).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].mbid, "a");
        assert_eq!(filtered[1].mbid, "c");
    }

    #[test]
    fn test_exclude_removes_listed_credits() {
        let filter = ArtistCreditFilter::new(&[10, 30], false);

        let recordings = vec![
            recording("a", 10),
            recording("b", 20),
            recording("c", 30),
        ];
        let filtered = filter.process(vec![recordings]).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].mbid, "b");
    }

    #[test]
    fn test_missing_artist_credit_is_soft_skipped() {
        let filter = ArtistCreditFilter::new(&[10], false);

        let recordings = vec![
            recording("a", 20),
            Recording::new("b"),
            Recording::new("c").with_artist(Artist::new().with_name("Unattributed")),
        ];
        let filtered = filter.process(vec![recordings]).unwrap();

        // b and c lack credit ids; dropped without failing the stage
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].mbid, "a");
    }

    #[test]
    fn test_empty_credit_set_is_a_structural_failure() {
        let filter = ArtistCreditFilter::new(&[], true);

        let result = filter.process(vec![vec![recording("a", 10)]]);
        assert!(matches!(
            result,
            Err(FilterError::DegenerateConfiguration { .. })
        ));
    }
}
