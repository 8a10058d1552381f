//! Linearizer with a cache shared across threads
//!
//! The cache is keyed by type identifier and bound to one immutable graph
//! snapshot. Two threads racing on the same type compute identical orders,
//! and only the first insert is kept.

use super::linearizer::{LinearizationContext, Linearizer};
use dashmap::DashMap;
use mro_core::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe linearizer over a shared hierarchy snapshot
#[derive(Debug, Clone)]
pub struct SharedLinearizer {
    graph: Arc<HierarchyGraph>,
    cache: Arc<DashMap<TypeId, Linearization>>,
    config: MroConfig,
}

impl SharedLinearizer {
    /// Create a shared linearizer with default configuration
    #[must_use]
    pub fn new(graph: Arc<HierarchyGraph>) -> Self {
        Self::with_config(graph, MroConfig::default())
    }

    #[must_use]
    pub fn with_config(graph: Arc<HierarchyGraph>, config: MroConfig) -> Self {
        Self {
            graph,
            cache: Arc::new(DashMap::new()),
            config,
        }
    }

    /// The snapshot this linearizer answers for
    #[must_use]
    pub fn graph(&self) -> &Arc<HierarchyGraph> {
        &self.graph
    }

    /// Compute or fetch the method resolution order of `type_id`
    ///
    /// Every sub-linearization computed along the way is offered to the cache.
    ///
    /// # Errors
    ///
    /// Same as [`Linearizer::linearize`]. Failures are never cached.
    pub fn linearize(&self, type_id: &str) -> Result<Linearization> {
        let caching = self.config.cache.enabled;
        if caching && let Some(hit) = self.cache.get(type_id) {
            debug!("Shared cache hit for '{type_id}'");
            return Ok(hit.value().clone());
        }

        let linearizer = Linearizer::with_config(&self.graph, &self.config.linearizer);
        let mut ctx = LinearizationContext::new();
        let order = linearizer.linearize_in(&mut ctx, type_id)?;

        if caching {
            for (id, computed) in ctx.into_entries() {
                self.store(id, computed);
            }
            self.store(type_id.into(), order.clone());
        }
        Ok(order)
    }

    fn store(&self, id: TypeId, order: Linearization) {
        if self.cache.len() >= self.config.cache.max_entries && !self.cache.contains_key(&id) {
            return;
        }
        self.cache.entry(id).or_insert(order);
    }

    /// Number of cached linearizations
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every cached linearization
    pub fn clear(&self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Arc<HierarchyGraph> {
        Arc::new(
            HierarchyGraph::new()
                .with_type("O", Vec::<&str>::new())
                .with_type("A", ["O"])
                .with_type("B", ["A"]),
        )
    }

    #[test]
    fn test_ancestors_are_cached_on_first_query() -> Result<()> {
        let shared = SharedLinearizer::new(chain());
        shared.linearize("B")?;
        assert_eq!(shared.cached_len(), 3);
        assert_eq!(shared.linearize("A")?.as_slice().len(), 2);
        shared.clear();
        assert_eq!(shared.cached_len(), 0);
        Ok(())
    }

    #[test]
    fn test_cache_bound_is_respected() -> Result<()> {
        let mut config = MroConfig::default();
        config.cache.max_entries = 1;
        let shared = SharedLinearizer::with_config(chain(), config);
        let order = shared.linearize("B")?;
        assert_eq!(order.len(), 3);
        assert_eq!(shared.cached_len(), 1);
        Ok(())
    }

    #[test]
    fn test_disabled_cache_stays_empty() -> Result<()> {
        let mut config = MroConfig::default();
        config.cache.enabled = false;
        let shared = SharedLinearizer::with_config(chain(), config);
        shared.linearize("B")?;
        assert_eq!(shared.cached_len(), 0);
        Ok(())
    }

    #[test]
    fn test_failures_are_not_cached() {
        let shared = SharedLinearizer::new(Arc::new(HierarchyGraph::new().with_type("A", ["Z"])));
        assert!(shared.linearize("A").unwrap_err().is_unknown_type());
        assert_eq!(shared.cached_len(), 0);
    }
}
