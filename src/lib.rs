//! # Weft - ADF to Fabric Pipeline Definition Transformer
//!
//! **Weft** rewrites Azure Data Factory pipeline definitions into the shape
//! Microsoft Fabric's pipeline engine expects. ADF models a Copy activity's
//! connections as dataset references: named pointers into a catalog of
//! reusable dataset definitions, parameterized at the call site. Fabric
//! embeds the resolved connection shape directly in the activity as
//! `datasetSettings`. Weft performs that rewrite for every Copy activity in
//! a pipeline, however deeply it is nested inside ForEach, IfCondition,
//! Switch, and Until containers.
//!
//! ## Core Workflow
//!
//! 1.  **Load your documents**: parse the pipeline definition with
//!     [`PipelineDefinition::from_json`](pipeline::PipelineDefinition::from_json)
//!     and the exported dataset array with
//!     [`DatasetCatalog::from_json`](catalog::DatasetCatalog::from_json),
//!     or implement [`DatasetStore`](catalog::DatasetStore) yourself if your
//!     datasets live somewhere else.
//! 2.  **Transform**: create a
//!     [`PipelineTransformer`](transform::PipelineTransformer) over the
//!     store and call `transform` once per pipeline.
//! 3.  **Inspect the outcome**: the returned
//!     [`TransformOutcome`](transform::TransformOutcome) carries the
//!     Fabric-native definition plus a warning for everything that could
//!     not be fully resolved: an unknown dataset reference, a null
//!     parameter value, a global parameter missing from the supplied
//!     context. The transform itself never fails.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use weft::prelude::*;
//!
//! fn main() -> weft::prelude::Result<()> {
//!     let pipeline_json = std::fs::read_to_string("pipeline.json")?;
//!     let datasets_json = std::fs::read_to_string("datasets.json")?;
//!
//!     let pipeline = PipelineDefinition::from_json(&pipeline_json)?;
//!     let catalog = DatasetCatalog::from_json(&datasets_json)?;
//!
//!     let transformer = PipelineTransformer::new(&catalog);
//!     let outcome = transformer.transform(&pipeline, &JsonMap::new(), "orders_daily");
//!
//!     for warning in &outcome.warnings {
//!         eprintln!("warning: {warning}");
//!     }
//!
//!     println!("{}", serde_json::to_string_pretty(&outcome.pipeline)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod expression;
pub mod pipeline;
pub mod prelude;
pub mod transform;
