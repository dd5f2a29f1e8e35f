// src/models/stats_accumulator.rs
use crate::models::Category;

/// Per-category byte counters for a single run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsAccumulator {
    counts: [u64; Category::COUNT],
}

impl StatsAccumulator {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Category::COUNT],
        }
    }

    // `Category::index` is exhaustive and below `Category::COUNT`.
    #[inline]
    pub fn increment(&mut self, category: Category) {
        let count = &mut self.counts[category.index()];
        *count = count.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub fn count(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// Share of `Total` held by `category`, or `0.0` when nothing was counted.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn percent_of_total(&self, category: Category) -> f64 {
        let total = self.count(Category::Total);
        if total == 0 {
            return 0.0;
        }
        (self.count(category) as f64 / total as f64) * 100.0
    }

    #[inline]
    pub fn reset(&mut self) {
        self.counts = [0; Category::COUNT];
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.count(category)))
    }
}
