//! Dataset lookup: the store seam, an in-memory catalog, and the
//! per-transform resolver with its memo cache.

use crate::error::DefinitionError;
use crate::pipeline::{CopyActivity, DatasetDefinition, JsonMap};
use ahash::AHashMap;
use std::fmt;

/// Where dataset definitions come from.
///
/// The transform only ever asks for datasets by name, so anything that can
/// answer that question can back it: the bundled [`DatasetCatalog`], a
/// workspace metadata client, a test double.
pub trait DatasetStore {
    /// Looks up a dataset definition by its factory name.
    fn dataset_by_name(&self, name: &str) -> Option<DatasetDefinition>;
}

/// An in-memory dataset store keyed by dataset name.
#[derive(Debug, Clone, Default)]
pub struct DatasetCatalog {
    datasets: AHashMap<String, DatasetDefinition>,
}

impl DatasetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a JSON array of dataset documents, the shape a
    /// factory export produces.
    pub fn from_json(text: &str) -> Result<Self, DefinitionError> {
        let datasets: Vec<DatasetDefinition> =
            serde_json::from_str(text).map_err(|e| DefinitionError::InvalidDataset(e.to_string()))?;
        Ok(datasets.into_iter().collect())
    }

    pub fn insert(&mut self, dataset: DatasetDefinition) {
        self.datasets.insert(dataset.name.clone(), dataset);
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl FromIterator<DatasetDefinition> for DatasetCatalog {
    fn from_iter<I: IntoIterator<Item = DatasetDefinition>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for dataset in iter {
            catalog.insert(dataset);
        }
        catalog
    }
}

impl DatasetStore for DatasetCatalog {
    fn dataset_by_name(&self, name: &str) -> Option<DatasetDefinition> {
        self.datasets.get(name).cloned()
    }
}

/// Which half of a copy activity a dataset binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSide {
    Source,
    Sink,
}

impl fmt::Display for DatasetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSide::Source => write!(f, "source"),
            DatasetSide::Sink => write!(f, "sink"),
        }
    }
}

/// The structural mapping extracted from one copy activity: the datasets
/// behind its first input and first output references, and each side's
/// call-site parameter values.
///
/// A side whose reference cannot be resolved is simply `None`; the copy
/// transformer skips settings embedding for that side rather than failing
/// the pipeline.
#[derive(Debug, Clone, Default)]
pub struct CopyDatasetMappings {
    pub source_dataset: Option<DatasetDefinition>,
    pub sink_dataset: Option<DatasetDefinition>,
    pub source_parameters: JsonMap,
    pub sink_parameters: JsonMap,
}

/// Resolves dataset references against a store, memoizing lookups for the
/// lifetime of one pipeline transform.
///
/// The cache holds misses as well as hits, so a store backed by a network
/// call is asked about each name at most once per transform. The cache is
/// deliberately not shared across transforms to avoid staleness.
pub struct DatasetResolver<'a> {
    store: &'a dyn DatasetStore,
    cache: AHashMap<String, Option<DatasetDefinition>>,
}

impl<'a> DatasetResolver<'a> {
    pub fn new(store: &'a dyn DatasetStore) -> Self {
        Self {
            store,
            cache: AHashMap::new(),
        }
    }

    /// Looks up a dataset, consulting the memo cache first.
    pub fn resolve(&mut self, name: &str) -> Option<DatasetDefinition> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        let resolved = self.store.dataset_by_name(name);
        self.cache.insert(name.to_string(), resolved.clone());
        resolved
    }

    /// Extracts the dataset mappings for one copy activity.
    ///
    /// The first entry of `inputs` names the source dataset and the first
    /// entry of `outputs` names the sink; each reference's `parameters`
    /// object becomes the corresponding side's parameter map.
    pub fn copy_activity_mappings(&mut self, activity: &CopyActivity) -> CopyDatasetMappings {
        let mut mappings = CopyDatasetMappings::default();
        if let Some(reference) = activity.inputs.as_ref().and_then(|refs| refs.first()) {
            mappings.source_dataset = self.resolve(&reference.reference_name);
            mappings.source_parameters = reference.parameters.clone();
        }
        if let Some(reference) = activity.outputs.as_ref().and_then(|refs| refs.first()) {
            mappings.sink_dataset = self.resolve(&reference.reference_name);
            mappings.sink_parameters = reference.parameters.clone();
        }
        mappings
    }
}
