//! # Entities Crate
//!
//! Core domain entities for the playlist generation pipeline: recordings
//! and the artists credited on them.
//!
//! ## Main Components
//!
//! - **types**: Recording and Artist structs, plus the ArtistCreditId alias
//!
//! Entities are plain data. They are produced upstream (metadata lookup,
//! recommendation sources) and consumed read-only by the filtering stages;
//! nothing in this crate performs I/O.
//!
//! ## Example Usage
//!
//! ```ignore
//! use entities::{Artist, Recording};
//!
//! let recording = Recording::new("8f3471b5-7e6a-48da-86a9-c1c07a0f47ae")
//!     .with_name("Ashes to Ashes")
//!     .with_year(1980)
//!     .with_ranking(0.92)
//!     .with_artist(Artist::new().with_credit_id(956).with_name("David Bowie"));
//! ```

// Public modules
pub mod types;

// Re-export commonly used types for convenience
pub use types::{Artist, ArtistCreditId, Recording};
