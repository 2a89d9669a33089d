//! Pipeline of filtering stages for playlist generation.
//!
//! This crate provides:
//! - FilterElement trait that every filtering stage implements
//! - Six filter implementations (artist-credit selection and limiting,
//!   de-duplication, metadata and year-range filtering)
//! - FilterPipeline for composing stages into a chain
//!
//! ## Architecture
//! A stage consumes one ordered sequence of recordings and produces a new
//! one; the pipeline validates that adjacent stages declare compatible
//! entity kinds before running them in order. Stages are pure: they hold
//! only their own configuration and never mutate input entities.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::FilterPipeline;
//! use pipeline::filters::*;
//!
//! // Build the filter chain
//! let pipeline = FilterPipeline::new()
//!     .add_element(EmptyMetadataFilter)
//!     .add_element(DuplicateRecordingFilter)
//!     .add_element(YearRangeFilter::new(1970, 1989, false))
//!     .add_element(ArtistCreditLimiter::new(2, true));
//!
//! // Run it
//! let playlist = pipeline.process(recordings)?;
//! ```

pub mod error;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use error::{FilterError, Result};
pub use filter_pipeline::FilterPipeline;
pub use traits::{EntityKind, FilterElement};
