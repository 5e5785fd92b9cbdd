//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! weft crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use weft::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let pipeline = PipelineDefinition::from_json(&std::fs::read_to_string("pipeline.json")?)?;
//! let catalog = DatasetCatalog::from_json(&std::fs::read_to_string("datasets.json")?)?;
//!
//! let outcome = PipelineTransformer::new(&catalog).transform(&pipeline, &JsonMap::new(), "demo");
//! println!("{} warnings", outcome.warnings.len());
//! # Ok(())
//! # }
//! ```

// Transform entry point and outcome
pub use crate::transform::{PipelineTransformer, TransformOutcome};

// Dataset lookup
pub use crate::catalog::{
    CopyDatasetMappings, DatasetCatalog, DatasetResolver, DatasetSide, DatasetStore,
};

// Document model
pub use crate::pipeline::{
    Activity, CopyActivity, DatasetDefinition, DatasetReference, JsonMap, PipelineDefinition,
};

// Expression substitution
pub use crate::expression::{Substituter, substitute_parameters};

// Error and warning types
pub use crate::error::{DefinitionError, TransformWarning};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
