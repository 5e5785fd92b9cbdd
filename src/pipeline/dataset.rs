use super::definition::JsonMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dataset document as exported from a data factory: a named resource
/// whose `properties` carry the connection shape the transform embeds
/// into copy activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDefinition {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub properties: DatasetProperties,
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// The `properties` body of a dataset document.
///
/// `typeProperties` is the connection shape (e.g. a blob location with
/// `fileSystem`/`folderPath`/`fileName`); its leaf values may be
/// literals, `@dataset().NAME` parameter references, or Expression
/// wrapper objects. `parameters` declares the names those references
/// resolve against.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetProperties {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub dataset_type: String,
    #[serde(
        rename = "linkedServiceName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub linked_service_name: Option<Value>,
    #[serde(default, skip_serializing_if = "JsonMap::is_empty")]
    pub parameters: JsonMap,
    #[serde(
        rename = "typeProperties",
        default,
        skip_serializing_if = "Value::is_null"
    )]
    pub type_properties: Value,
    #[serde(flatten)]
    pub extra: JsonMap,
}
