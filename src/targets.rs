//! Render Target Registry
//! Named output slots that charts bind to. A chart configuration resolves
//! its target once, at configuration time; resolving an unknown id is the
//! fatal "missing element" condition.

use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TargetError {
    #[error("no render target with id {0:?}")]
    NotFound(String),
}

/// Opaque handle to a registered render target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    id: String,
}

impl RenderTarget {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The set of target ids the application exposes. Populated once at
/// startup, before any configurator runs.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    ids: BTreeSet<String>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    /// Look up a target by id.
    pub fn resolve(&self, id: &str) -> Result<RenderTarget, TargetError> {
        if self.ids.contains(id) {
            Ok(RenderTarget { id: id.to_string() })
        } else {
            Err(TargetError::NotFound(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_ids() {
        let mut registry = TargetRegistry::new();
        registry.register("pieChart");
        let target = registry.resolve("pieChart").unwrap();
        assert_eq!(target.id(), "pieChart");
    }

    #[test]
    fn missing_id_is_an_error() {
        let registry = TargetRegistry::new();
        assert_eq!(
            registry.resolve("piechart"),
            Err(TargetError::NotFound("piechart".to_string()))
        );
    }

    #[test]
    fn ids_are_case_sensitive() {
        // "pieChart" and "piechart" are distinct targets.
        let mut registry = TargetRegistry::new();
        registry.register("pieChart");
        assert!(registry.resolve("piechart").is_err());
    }
}
