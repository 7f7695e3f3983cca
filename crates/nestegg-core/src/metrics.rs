//! Monthly aggregation over classified entries

use crate::models::{ClassifiedEntry, EntryCategory, MonthlyMetrics};

/// Sum classified entries into monthly totals per category
///
/// Every entry lands in exactly one bucket. Amounts are summed as entered
/// regardless of the frequency field; annual entries are recorded as their
/// monthly contribution (see DESIGN.md for the normalization decision).
pub fn aggregate(entries: &[ClassifiedEntry]) -> MonthlyMetrics {
    let mut metrics = MonthlyMetrics::default();

    for entry in entries {
        let amount = entry.countable_amount;
        match entry.category {
            EntryCategory::Income => metrics.monthly_income += amount,
            EntryCategory::Expense => metrics.monthly_expenses += amount,
            EntryCategory::Investment => metrics.monthly_investments += amount,
            EntryCategory::Loan => metrics.monthly_loans += amount,
        }
    }

    metrics.total_outflow =
        metrics.monthly_expenses + metrics.monthly_investments + metrics.monthly_loans;
    metrics
}
