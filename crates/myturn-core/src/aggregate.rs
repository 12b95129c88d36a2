//! Cross-query deduplication of site records.

use std::collections::HashMap;

use crate::site::SiteRecord;

/// Accumulates site records from every query point, keeping one record per
/// site identity. A record seen again replaces the earlier one wholesale.
#[derive(Debug, Default)]
pub struct SiteAggregator {
    sites: HashMap<String, SiteRecord>,
}

impl SiteAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one query's batch. Last write wins per identity.
    pub fn add<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = SiteRecord>,
    {
        for site in batch {
            self.sites.insert(site.identity().to_owned(), site);
        }
    }

    /// All distinct sites seen so far.
    ///
    /// Iteration order is unspecified and may differ between runs. Callers
    /// that need a stable order should use [`SiteAggregator::into_sorted`].
    pub fn all(&self) -> impl Iterator<Item = &SiteRecord> {
        self.sites.values()
    }

    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&SiteRecord> {
        self.sites.get(identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Consumes the aggregator, returning its sites ordered by identity.
    #[must_use]
    pub fn into_sorted(self) -> Vec<SiteRecord> {
        let mut sites: Vec<SiteRecord> = self.sites.into_values().collect();
        sites.sort_by(|a, b| a.identity().cmp(b.identity()));
        sites
    }
}
