//! Error types for the filter pipeline.

use crate::traits::EntityKind;
use thiserror::Error;

/// Structural failures raised by filter stages and pipeline wiring.
///
/// These are fatal to the stage invocation: the configuration or input
/// cannot be evaluated meaningfully. An individual recording merely failing
/// a predicate, or lacking optional metadata a stage tolerates, is never an
/// error — those recordings are dropped with a debug diagnostic instead.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The engine handed a stage the wrong number of input sequences.
    #[error("{element} expected {expected} input sequence(s) but received {found}")]
    InputArity {
        element: String,
        expected: usize,
        found: usize,
    },

    /// A stage that requires every recording to be attributable to an
    /// artist credit found one that is not.
    #[error("{element} needs all input recordings to have artist.artist_credit_id set, but recording {mbid} has none")]
    MissingArtistCredit { element: String, mbid: String },

    /// The caller-supplied configuration cannot be evaluated meaningfully.
    #[error("{element} configuration is unusable: {reason}")]
    DegenerateConfiguration { element: String, reason: String },

    /// Two adjacent stages in a pipeline declare incompatible entity kinds.
    #[error("{upstream} produces {produced:?} but {downstream} expects {expected:?}")]
    IncompatibleStages {
        upstream: String,
        downstream: String,
        produced: Vec<EntityKind>,
        expected: Vec<EntityKind>,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, FilterError>;
