use crate::error::DefinitionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON object with its key order preserved.
pub type JsonMap = serde_json::Map<String, Value>;

/// A complete pipeline document as exported from a data factory.
///
/// Only the activity tree is modelled in full; every other field the
/// document carries is kept verbatim in the flattened remainder so the
/// transform is lossless for content it does not understand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: PipelineProperties,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// The `properties` body of a pipeline document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PipelineDefinition {
    /// Parses a pipeline document from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(text).map_err(|e| DefinitionError::InvalidPipeline(e.to_string()))
    }
}

/// One activity in the pipeline tree, tagged by its `type` field.
///
/// The variants cover the activity types this transform acts on: `Copy`
/// leaves and the four container forms whose children it must recurse
/// into. Every other activity type a factory can emit deserializes into
/// `Passthrough` and is carried through the transform untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Activity {
    Copy(CopyActivity),
    ForEach(LoopActivity),
    IfCondition(IfConditionActivity),
    Switch(SwitchActivity),
    Until(LoopActivity),
    #[serde(untagged)]
    Passthrough(Value),
}

/// A Copy activity: the one leaf type this transform rewrites.
///
/// `inputs` and `outputs` hold the legacy dataset-reference arrays; the
/// transform dissolves them into `typeProperties.source.datasetSettings`
/// and `typeProperties.sink.datasetSettings`. `typeProperties` stays an
/// untyped map because most of its content (store settings, format
/// settings, staging and tuning fields) must survive byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyActivity {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<DatasetReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<DatasetReference>>,
    #[serde(
        default,
        rename = "typeProperties",
        skip_serializing_if = "JsonMap::is_empty"
    )]
    pub type_properties: JsonMap,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// A ForEach or Until activity. Both nest their children at
/// `typeProperties.activities` and are otherwise opaque loop
/// configuration, so they share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopActivity {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, rename = "typeProperties")]
    pub type_properties: LoopProperties,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoopProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// An IfCondition activity with its two child branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfConditionActivity {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, rename = "typeProperties")]
    pub type_properties: IfConditionProperties,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IfConditionProperties {
    #[serde(
        default,
        rename = "ifTrueActivities",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub if_true_activities: Vec<Activity>,
    #[serde(
        default,
        rename = "ifFalseActivities",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub if_false_activities: Vec<Activity>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// A Switch activity: children nest under every case and under the
/// default branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchActivity {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, rename = "typeProperties")]
    pub type_properties: SwitchProperties,
    #[serde(flatten)]
    pub extra: JsonMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchProperties {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cases: Vec<SwitchCase>,
    #[serde(
        default,
        rename = "defaultActivities",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub default_activities: Vec<Activity>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// One case arm of a Switch activity. The match value stays in the
/// flattened remainder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SwitchCase {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// A named pointer from an activity to a dataset definition, plus the
/// parameter values supplied at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReference {
    #[serde(rename = "referenceName")]
    pub reference_name: String,
    #[serde(rename = "type", default = "DatasetReference::default_type")]
    pub reference_type: String,
    #[serde(default, skip_serializing_if = "JsonMap::is_empty")]
    pub parameters: JsonMap,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl DatasetReference {
    fn default_type() -> String {
        "DatasetReference".to_string()
    }
}
