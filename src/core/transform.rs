use crate::domain::model::Dataset;
use std::collections::HashMap;

type TransformFn = Box<dyn Fn(Dataset) -> Dataset + Send + Sync>;

/// Per-dashboard row transforms, keyed by dashboard id.
///
/// Construct one at the composition root and pass it by reference wherever
/// registration or application happens; there is no process-wide instance.
/// At most one transform per dashboard: registering again overwrites.
#[derive(Default)]
pub struct TransformRegistry {
    transforms: HashMap<String, TransformFn>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, dashboard_id: &str, transform: F)
    where
        F: Fn(Dataset) -> Dataset + Send + Sync + 'static,
    {
        self.transforms
            .insert(dashboard_id.to_string(), Box::new(transform));
    }

    /// Apply the transform registered for `dashboard_id`, or return the
    /// dataset unchanged when none is registered. The transform's output is
    /// returned verbatim; the registering party is responsible for keeping
    /// it a valid dataset.
    pub fn apply(&self, dashboard_id: &str, dataset: Dataset) -> Dataset {
        match self.transforms.get(dashboard_id) {
            Some(transform) => transform(dataset),
            None => dataset,
        }
    }
}
