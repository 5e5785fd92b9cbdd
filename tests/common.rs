//! Common test utilities for building pipeline documents, dataset
//! definitions, and catalogs.
use serde_json::{Value, json};
use weft::prelude::*;

/// Converts a `json!` object literal into a parameter map.
#[allow(dead_code)]
pub fn params(value: Value) -> JsonMap {
    value.as_object().cloned().unwrap_or_default()
}

/// A parameterized Json dataset on blob storage, the source side of the
/// standard copy fixtures. Every location field is an Expression over a
/// declared dataset parameter.
#[allow(dead_code)]
pub fn create_source_dataset() -> DatasetDefinition {
    serde_json::from_value(json!({
        "name": "AzureJsonSource",
        "properties": {
            "type": "Json",
            "linkedServiceName": {
                "referenceName": "ls_adls_landing",
                "type": "LinkedServiceReference"
            },
            "parameters": {
                "p_Container": { "type": "string" },
                "p_Directory": { "type": "string" },
                "p_FileName": { "type": "string" }
            },
            "typeProperties": {
                "location": {
                    "type": "AzureBlobFSLocation",
                    "fileSystem": { "value": "@dataset().p_Container", "type": "Expression" },
                    "folderPath": { "value": "@dataset().p_Directory", "type": "Expression" },
                    "fileName": { "value": "@dataset().p_FileName", "type": "Expression" }
                }
            }
        }
    }))
    .expect("source dataset fixture is valid")
}

/// The sink-side twin of [`create_source_dataset`].
#[allow(dead_code)]
pub fn create_sink_dataset() -> DatasetDefinition {
    serde_json::from_value(json!({
        "name": "AzureJsonSink",
        "properties": {
            "type": "Json",
            "linkedServiceName": {
                "referenceName": "ls_adls_curated",
                "type": "LinkedServiceReference"
            },
            "parameters": {
                "p_Container": { "type": "string" },
                "p_Directory": { "type": "string" },
                "p_FileName": { "type": "string" }
            },
            "typeProperties": {
                "location": {
                    "type": "AzureBlobFSLocation",
                    "fileSystem": { "value": "@dataset().p_Container", "type": "Expression" },
                    "folderPath": { "value": "@dataset().p_Directory", "type": "Expression" },
                    "fileName": { "value": "@dataset().p_FileName", "type": "Expression" }
                }
            }
        }
    }))
    .expect("sink dataset fixture is valid")
}

/// A catalog holding both standard datasets.
#[allow(dead_code)]
pub fn create_catalog() -> DatasetCatalog {
    [create_source_dataset(), create_sink_dataset()]
        .into_iter()
        .collect()
}

/// A full Copy activity referencing the standard datasets, with store and
/// format settings, tuning fields, and the usual activity boilerplate.
#[allow(dead_code)]
pub fn create_copy_activity_json(name: &str, source_params: Value, sink_params: Value) -> Value {
    json!({
        "name": name,
        "type": "Copy",
        "dependsOn": [],
        "policy": {
            "timeout": "0.12:00:00",
            "retry": 0,
            "secureOutput": false,
            "secureInput": false
        },
        "userProperties": [],
        "typeProperties": {
            "source": {
                "type": "JsonSource",
                "storeSettings": {
                    "type": "AzureBlobFSReadSettings",
                    "recursive": true,
                    "wildcardFolderPath": "incoming/*",
                    "wildcardFileName": "*.json",
                    "enablePartitionDiscovery": false
                },
                "formatSettings": { "type": "JsonReadSettings" }
            },
            "sink": {
                "type": "JsonSink",
                "storeSettings": { "type": "AzureBlobFSWriteSettings" },
                "formatSettings": { "type": "JsonWriteSettings" }
            },
            "enableStaging": true,
            "parallelCopies": 13,
            "dataIntegrationUnits": 32
        },
        "inputs": [{
            "referenceName": "AzureJsonSource",
            "type": "DatasetReference",
            "parameters": source_params
        }],
        "outputs": [{
            "referenceName": "AzureJsonSink",
            "type": "DatasetReference",
            "parameters": sink_params
        }]
    })
}

/// Call-site source parameters that reference global parameters through
/// Expression objects, plus one literal.
#[allow(dead_code)]
pub fn create_global_source_params() -> Value {
    json!({
        "p_Container": { "value": "@pipeline().globalParameters.gp_Container", "type": "Expression" },
        "p_Directory": { "value": "@pipeline().globalParameters.gp_Directory", "type": "Expression" },
        "p_FileName": "orders.json"
    })
}

/// Plain literal sink parameters.
#[allow(dead_code)]
pub fn create_literal_sink_params() -> Value {
    json!({
        "p_Container": "landingzone",
        "p_Directory": "curated/orders",
        "p_FileName": "orders.json"
    })
}

/// Wraps activity JSON values into a pipeline document.
#[allow(dead_code)]
pub fn create_pipeline(name: &str, activities: Vec<Value>) -> PipelineDefinition {
    serde_json::from_value(json!({
        "name": name,
        "properties": {
            "activities": activities
        }
    }))
    .expect("pipeline fixture is valid")
}

/// Wraps an activity in a ForEach container.
#[allow(dead_code)]
pub fn wrap_in_foreach(name: &str, child: Value) -> Value {
    json!({
        "name": name,
        "type": "ForEach",
        "typeProperties": {
            "items": { "value": "@pipeline().parameters.p_Items", "type": "Expression" },
            "isSequential": true,
            "activities": [child]
        }
    })
}

/// Wraps an activity in the true branch of an IfCondition container.
#[allow(dead_code)]
pub fn wrap_in_if_true(name: &str, child: Value) -> Value {
    json!({
        "name": name,
        "type": "IfCondition",
        "typeProperties": {
            "expression": { "value": "@equals(1, 1)", "type": "Expression" },
            "ifTrueActivities": [child]
        }
    })
}

/// Wraps an activity in the sole case of a Switch container.
#[allow(dead_code)]
pub fn wrap_in_switch_case(name: &str, child: Value) -> Value {
    json!({
        "name": name,
        "type": "Switch",
        "typeProperties": {
            "on": { "value": "@pipeline().parameters.p_Mode", "type": "Expression" },
            "cases": [
                { "value": "full", "activities": [child] }
            ],
            "defaultActivities": []
        }
    })
}

/// Wraps an activity in an Until container.
#[allow(dead_code)]
pub fn wrap_in_until(name: &str, child: Value) -> Value {
    json!({
        "name": name,
        "type": "Until",
        "typeProperties": {
            "expression": { "value": "@equals(variables('done'), true)", "type": "Expression" },
            "timeout": "0.01:00:00",
            "activities": [child]
        }
    })
}

/// An activity type the transform has no knowledge of.
#[allow(dead_code)]
pub fn create_opaque_activity(name: &str) -> Value {
    json!({
        "name": name,
        "type": "Web",
        "dependsOn": [],
        "typeProperties": {
            "url": "https://example.net/hook",
            "method": "POST",
            "body": { "value": "@pipeline().parameters.p_Body", "type": "Expression" }
        }
    })
}

/// Serializes a transformed pipeline back to a JSON value for structural
/// assertions.
#[allow(dead_code)]
pub fn to_value(pipeline: &PipelineDefinition) -> Value {
    serde_json::to_value(pipeline).expect("pipeline serializes")
}
