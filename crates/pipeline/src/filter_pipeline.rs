//! The FilterPipeline orchestrates multiple filtering stages.
//!
//! This module provides the main FilterPipeline struct that chains
//! stages together using the builder pattern and validates their
//! declared entity kinds before execution.

use crate::error::{FilterError, Result};
use crate::traits::FilterElement;
use entities::Recording;
use tracing;

/// Chains filtering stages together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_element(EmptyMetadataFilter)
///     .add_element(DuplicateRecordingFilter)
///     .add_element(ArtistCreditLimiter::new(2, true));
///
/// let playlist = pipeline.process(recordings)?;
/// ```
pub struct FilterPipeline {
    elements: Vec<Box<dyn FilterElement>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_element(mut self, element: impl FilterElement + 'static) -> Self {
        self.elements.push(Box::new(element));
        self
    }

    /// Check that every stage's declared outputs match the next stage's
    /// declared inputs.
    ///
    /// # Returns
    /// * `Ok(())` - All adjacent stages are compatible
    /// * `Err(FilterError::IncompatibleStages)` - The first mismatch found
    pub fn validate(&self) -> Result<()> {
        for pair in self.elements.windows(2) {
            let (upstream, downstream) = (&pair[0], &pair[1]);
            if upstream.outputs() != downstream.inputs() {
                return Err(FilterError::IncompatibleStages {
                    upstream: upstream.name().to_string(),
                    downstream: downstream.name().to_string(),
                    produced: upstream.outputs().to_vec(),
                    expected: downstream.inputs().to_vec(),
                });
            }
        }
        Ok(())
    }

    /// Apply all stages in sequence to the recordings.
    ///
    /// ## Algorithm
    /// 1. Validate stage compatibility (no stage runs on a mis-wired chain)
    /// 2. For each stage in order:
    ///    a. Log stage name and input count
    ///    b. Run the stage
    ///    c. Log output count
    /// 3. Return the final sequence
    ///
    /// # Returns
    /// * `Ok(Vec<Recording>)` - The sequence after all stages
    /// * `Err(FilterError)` - If validation or any stage fails
    pub fn process(&self, recordings: Vec<Recording>) -> Result<Vec<Recording>> {
        self.validate()?;

        let mut current = recordings;
        for element in &self.elements {
            tracing::debug!(
                "Applying element: {} (input count: {})",
                element.name(),
                current.len()
            );
            current = element.process(vec![current])?;
            tracing::debug!(
                "Element applied: {} (output count: {})",
                element.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
