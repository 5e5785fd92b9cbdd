//! The pipeline transform: a depth-first rebuild of the activity tree that
//! rewrites every Copy activity into its Fabric-native form.

use crate::catalog::{DatasetResolver, DatasetStore};
use crate::error::TransformWarning;
use crate::pipeline::{JsonMap, PipelineDefinition};
use tracing::debug;

mod copy;
mod walker;

use walker::TreeWalker;

/// The result of one pipeline transform: the rewritten definition plus
/// everything that could not be fully resolved along the way.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub pipeline: PipelineDefinition,
    pub warnings: Vec<TransformWarning>,
}

impl TransformOutcome {
    /// True when every dataset reference and parameter resolved cleanly.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Rewrites ADF pipeline definitions into their Fabric-native shape.
///
/// The transformer holds only a shared reference to its dataset store, so
/// one instance can transform any number of pipelines, concurrently if the
/// caller wishes; all per-transform state (the resolver cache, the warning
/// list) lives inside a single [`transform`](Self::transform) call.
pub struct PipelineTransformer<'a> {
    store: &'a dyn DatasetStore,
}

impl<'a> PipelineTransformer<'a> {
    pub fn new(store: &'a dyn DatasetStore) -> Self {
        Self { store }
    }

    /// Transforms one pipeline definition.
    ///
    /// Copy activities at any nesting depth get their dataset references
    /// resolved, parameter-substituted, and embedded as `datasetSettings`;
    /// their `inputs`/`outputs` arrays are removed. Everything else in the
    /// tree is preserved as-is. The input pipeline is never mutated.
    ///
    /// `global_parameters` is a diagnostic context only: references to
    /// global parameters are never substituted here, but references to
    /// names missing from the context are reported as warnings.
    /// `pipeline_name` is used for logging.
    pub fn transform(
        &self,
        pipeline: &PipelineDefinition,
        global_parameters: &JsonMap,
        pipeline_name: &str,
    ) -> TransformOutcome {
        debug!(
            pipeline = pipeline_name,
            activities = pipeline.properties.activities.len(),
            "transforming pipeline definition"
        );
        let mut walker = TreeWalker::new(
            DatasetResolver::new(self.store),
            global_parameters,
            pipeline_name,
        );
        let mut transformed = pipeline.clone();
        let activities = std::mem::take(&mut transformed.properties.activities);
        transformed.properties.activities = walker.transform_activities(activities);
        TransformOutcome {
            pipeline: transformed,
            warnings: walker.into_warnings(),
        }
    }
}
