//! Boss progression ordering across mod namespaces
//!
//! Each namespace ships its own ranked table; the index concatenates them
//! into one total order (namespace priority first, then in-table order)
//! and answers name lookups with a forgiving substring fallback. Unknown
//! names sort last rather than failing.

use std::collections::HashMap;

use crate::models::Boss;

/// Rank returned for empty or unrecognized names. Sorts after every
/// real entry.
pub const UNKNOWN_RANK: usize = 999;

/// Immutable name-to-rank index over the total progression order.
///
/// Built once at startup; lookups never mutate, so the index is safe for
/// unsynchronized concurrent reads.
#[derive(Debug, Clone, Default)]
pub struct ProgressionIndex {
    /// Lowercased names in total order; the position is the rank.
    ordered: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl ProgressionIndex {
    /// Build the total order from ranked entities.
    ///
    /// Entities are sorted by `(namespace priority, order)`; the sort is
    /// stable, so entries tied on both keys keep their input order. The
    /// rank is the position in the result, not the in-table `order`
    /// value, since the per-namespace numbering restarts in each table.
    pub fn build<I>(bosses: I) -> Self
    where
        I: IntoIterator<Item = Boss>,
    {
        let mut all: Vec<Boss> = bosses.into_iter().collect();
        all.sort_by_key(|b| (b.r#mod.priority(), b.order));

        let ordered: Vec<String> = all.iter().map(|b| b.name.to_lowercase()).collect();
        let mut by_name = HashMap::with_capacity(ordered.len());
        for (rank, name) in ordered.iter().enumerate() {
            // First occurrence wins for duplicate names
            by_name.entry(name.clone()).or_insert(rank);
        }

        Self { ordered, by_name }
    }

    /// Progression rank for a name, `0` being the earliest encounter.
    ///
    /// Matching is case-insensitive and degrades gracefully: an exact
    /// match wins; otherwise the first entry in progression order related
    /// to the query by substring containment (in either direction) is
    /// used; otherwise [`UNKNOWN_RANK`]. Empty input is unknown. Never
    /// fails.
    pub fn rank_of(&self, name: &str) -> usize {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return UNKNOWN_RANK;
        }
        if let Some(&rank) = self.by_name.get(&query) {
            return rank;
        }
        self.ordered
            .iter()
            .position(|entry| entry.contains(&query) || query.contains(entry))
            .unwrap_or(UNKNOWN_RANK)
    }

    /// Order items by progression rank of the name `name_of` extracts.
    /// Unrecognized names sink to the end; ties keep their input order.
    pub fn sort_by_rank<T, F>(&self, items: &mut [T], name_of: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by_key(|item| self.rank_of(name_of(item)));
    }

    /// Number of entries in the total order.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
