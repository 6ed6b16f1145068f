//! Derived, transient projections of the dataset. Nothing here is persisted;
//! every table is recomputed from the cached tweets on each interaction.

use indexmap::IndexMap;
use serde::Serialize;

/// One chart's worth of data: an ordered label -> tweet-count table, the
/// shape the original dashboard kept in its `{label, Tweets}` frames.
#[derive(Debug, Clone, Serialize)]
pub struct CountTable {
    pub dimension: &'static str,
    pub rows: IndexMap<String, u64>,
}

impl CountTable {
    /// Builds a table sorted by descending count. The sort is stable, so
    /// labels with equal counts keep their first-seen order.
    pub fn sorted_desc(dimension: &'static str, counts: IndexMap<String, u64>) -> Self {
        let mut rows: Vec<(String, u64)> = counts.into_iter().collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        CountTable {
            dimension,
            rows: rows.into_iter().collect(),
        }
    }

    /// Builds a table keeping the given insertion order.
    pub fn ordered(dimension: &'static str, counts: IndexMap<String, u64>) -> Self {
        CountTable {
            dimension,
            rows: counts,
        }
    }

    pub fn total(&self) -> u64 {
        self.rows.values().sum()
    }

    pub fn max(&self) -> u64 {
        self.rows.values().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.rows.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// Word -> occurrence count, descending, already filtered and truncated.
#[derive(Debug, Clone, Serialize)]
pub struct WordFrequencies {
    pub rows: Vec<(String, u64)>,
}

impl WordFrequencies {
    pub fn max(&self) -> u64 {
        self.rows.first().map(|(_, count)| *count).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tweets per hour of day, indexed 0..=23.
#[derive(Debug, Clone, Serialize)]
pub struct HourHistogram(pub [u64; 24]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_desc_orders_rows_and_totals() {
        let mut counts = IndexMap::new();
        counts.insert("neutral".to_string(), 3u64);
        counts.insert("negative".to_string(), 9);
        counts.insert("positive".to_string(), 2);

        let table = CountTable::sorted_desc("Sentiment", counts);
        let labels: Vec<&str> = table.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["negative", "neutral", "positive"]);
        assert_eq!(table.total(), 14);
        assert_eq!(table.max(), 9);
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        let mut counts = IndexMap::new();
        counts.insert("United".to_string(), 4u64);
        counts.insert("Delta".to_string(), 4);

        let table = CountTable::sorted_desc("Airline", counts);
        let labels: Vec<&str> = table.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["United", "Delta"]);
    }
}
