//! Core domain types for recordings and artist credits.
//!
//! Every field that can be missing in upstream metadata is an explicit
//! `Option`: music metadata is messy, and the filtering stages pattern-match
//! on this optionality to decide between soft exclusion and hard failure.

use serde::{Deserialize, Serialize};

/// Identifier grouping one or more recordings performed under the same
/// named-artist attribution.
pub type ArtistCreditId = u64;

/// An artist as credited on a recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Artist credit this artist performs under, when known.
    pub artist_credit_id: Option<ArtistCreditId>,
    /// Display name, when known.
    pub name: Option<String>,
}

impl Artist {
    /// Create an artist with no metadata attached yet.
    pub fn new() -> Self {
        Self {
            artist_credit_id: None,
            name: None,
        }
    }

    pub fn with_credit_id(mut self, artist_credit_id: ArtistCreditId) -> Self {
        self.artist_credit_id = Some(artist_credit_id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl Default for Artist {
    fn default() -> Self {
        Self::new()
    }
}

/// A single recording in a playlist candidate sequence.
///
/// Only the MusicBrainz identifier is guaranteed; everything else depends on
/// how much upstream lookup managed to resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// MusicBrainz recording id, the identity used for de-duplication.
    pub mbid: String,
    /// Track name, when known.
    pub name: Option<String>,
    /// Release year, when known.
    pub year: Option<i32>,
    /// Recommendation score, when the upstream source provided one.
    pub ranking: Option<f64>,
    /// Credited artist, when resolved.
    pub artist: Option<Artist>,
}

impl Recording {
    /// Create a recording with only its identity set.
    pub fn new(mbid: impl Into<String>) -> Self {
        Self {
            mbid: mbid.into(),
            name: None,
            year: None,
            ranking: None,
            artist: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_ranking(mut self, ranking: f64) -> Self {
        self.ranking = Some(ranking);
        self
    }

    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.artist = Some(artist);
        self
    }

    /// Artist credit id of this recording, when both the artist and its
    /// credit id are present.
    pub fn artist_credit_id(&self) -> Option<ArtistCreditId> {
        self.artist.as_ref().and_then(|artist| artist.artist_credit_id)
    }
}
