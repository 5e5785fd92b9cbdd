use crate::catalog::{CopyDatasetMappings, DatasetResolver, DatasetSide};
use crate::error::TransformWarning;
use crate::expression::{self, Substituter};
use crate::pipeline::{CopyActivity, DatasetDefinition, JsonMap};
use serde_json::Value;
use tracing::{debug, warn};

/// Rewrites one Copy activity into its Fabric-native form.
///
/// Fabric embeds the connection shape directly in the activity as
/// `typeProperties.<side>.datasetSettings`, so the legacy dataset-reference
/// arrays are dissolved: each side's dataset is resolved, its
/// `typeProperties` are rewritten with the call-site parameters, and the
/// result is merged into the existing `source`/`sink` object. Store and
/// format settings already present on the activity are Fabric-compatible
/// and must survive untouched.
pub(super) struct CopyRewriter<'w, 'a> {
    resolver: &'w mut DatasetResolver<'a>,
    global_parameters: &'w JsonMap,
    pipeline_name: &'w str,
    warnings: &'w mut Vec<TransformWarning>,
}

impl<'w, 'a> CopyRewriter<'w, 'a> {
    pub(super) fn new(
        resolver: &'w mut DatasetResolver<'a>,
        global_parameters: &'w JsonMap,
        pipeline_name: &'w str,
        warnings: &'w mut Vec<TransformWarning>,
    ) -> Self {
        Self {
            resolver,
            global_parameters,
            pipeline_name,
            warnings,
        }
    }

    pub(super) fn rewrite(mut self, mut activity: CopyActivity) -> CopyActivity {
        debug!(
            pipeline = self.pipeline_name,
            activity = %activity.name,
            "rewriting copy activity"
        );
        let mappings = self.resolver.copy_activity_mappings(&activity);
        self.embed_side(&mut activity, &mappings, DatasetSide::Source);
        self.embed_side(&mut activity, &mappings, DatasetSide::Sink);
        // Fabric has no use for the dataset-reference arrays once the
        // connection shape is embedded.
        activity.inputs = None;
        activity.outputs = None;
        activity
    }

    /// Embeds `datasetSettings` for one side of the activity, or records a
    /// warning if the side's reference does not resolve. A side with no
    /// reference at all is left alone.
    fn embed_side(
        &mut self,
        activity: &mut CopyActivity,
        mappings: &CopyDatasetMappings,
        side: DatasetSide,
    ) {
        let (dataset, parameters) = match side {
            DatasetSide::Source => (&mappings.source_dataset, &mappings.source_parameters),
            DatasetSide::Sink => (&mappings.sink_dataset, &mappings.sink_parameters),
        };
        let references = match side {
            DatasetSide::Source => &activity.inputs,
            DatasetSide::Sink => &activity.outputs,
        };
        let reference_name = references
            .as_ref()
            .and_then(|refs| refs.first())
            .map(|reference| reference.reference_name.clone());

        let Some(dataset) = dataset else {
            if let Some(reference_name) = reference_name {
                warn!(
                    pipeline = self.pipeline_name,
                    activity = %activity.name,
                    %side,
                    dataset = %reference_name,
                    "dataset reference did not resolve; skipping settings embedding"
                );
                self.warnings.push(TransformWarning::UnresolvedDataset {
                    activity: activity.name.clone(),
                    side,
                    reference_name,
                });
            }
            return;
        };

        let settings = self.dataset_settings(dataset, parameters);
        for parameter in expression::global_parameter_names(&settings) {
            if !self.global_parameters.contains_key(&parameter) {
                self.warnings
                    .push(TransformWarning::UnknownGlobalParameter { parameter });
            }
        }

        let slot = activity
            .type_properties
            .entry(side.to_string())
            .or_insert_with(|| Value::Object(JsonMap::new()));
        if let Value::Object(side_map) = slot {
            side_map.insert("datasetSettings".to_string(), settings);
        }
    }

    /// Builds the `datasetSettings` object for one resolved dataset: its
    /// declared type, its linked service binding when present, and its
    /// connection shape with the side's parameters substituted in.
    fn dataset_settings(&mut self, dataset: &DatasetDefinition, parameters: &JsonMap) -> Value {
        let mut substituter = Substituter::new(parameters);
        let resolved = substituter.apply(&dataset.properties.type_properties);
        self.warnings.extend(substituter.finish());

        let mut settings = JsonMap::new();
        settings.insert(
            "type".to_string(),
            Value::String(dataset.properties.dataset_type.clone()),
        );
        if let Some(linked_service) = &dataset.properties.linked_service_name {
            settings.insert("linkedServiceName".to_string(), linked_service.clone());
        }
        settings.insert("typeProperties".to_string(), resolved);
        Value::Object(settings)
    }
}
