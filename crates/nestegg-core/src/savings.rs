//! Savings rate and potential-savings projection
//!
//! The projection math is pure; the only non-deterministic piece is the
//! one-time uplift roll, which callers persist through the entry store so
//! every later read returns the same figure. A fluctuating "potential
//! savings" number would mislead the user, so stability across sessions is
//! part of the contract, not a nicety.

use rand::Rng;

use crate::models::{MonthlyMetrics, SavingsProjection};

/// Smallest uplift the roll can add, in percentage points
pub const MIN_UPLIFT: f64 = 1.0;

/// Largest uplift the roll can add, in percentage points
pub const MAX_UPLIFT: f64 = 10.0;

/// Round to one decimal place, the display precision for all percentages
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Current savings rate in percent, 0 when there is no income
pub fn current_percent(metrics: &MonthlyMetrics) -> f64 {
    if metrics.monthly_income > 0.0 {
        round1((metrics.monthly_income - metrics.total_outflow) / metrics.monthly_income * 100.0)
    } else {
        0.0
    }
}

/// Roll the heuristic potential rate: current rate plus a uniform uplift
///
/// Called once per user on the first complete dashboard build, then again
/// only on an explicit refresh. The result is persisted; it is not derived
/// from spend analysis.
pub fn roll_uplift(current_savings_percent: f64) -> f64 {
    let uplift = rand::thread_rng().gen_range(MIN_UPLIFT..=MAX_UPLIFT);
    round1(current_savings_percent + uplift)
}

/// Build the savings projection from aggregated metrics and the stored
/// potential rate
///
/// With no income or no outflow the projection is suppressed entirely
/// (`has_no_data`) rather than showing misleading 0% figures. Negative
/// savings is a valid, displayable result.
pub fn compute_savings(metrics: &MonthlyMetrics, potential_percent: f64) -> SavingsProjection {
    if !metrics.has_income() || !metrics.has_spending() {
        return SavingsProjection::no_data();
    }

    let current_savings = metrics.monthly_income - metrics.total_outflow;
    let current_savings_percent = current_percent(metrics);
    let additional_savings_amount =
        metrics.monthly_income * potential_percent / 100.0 - current_savings;

    SavingsProjection {
        current_savings,
        current_savings_percent,
        potential_savings_percent: potential_percent,
        additional_savings_amount,
        savings_percent_diff: round1(potential_percent - current_savings_percent),
        has_no_data: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(income: f64, expenses: f64, investments: f64, loans: f64) -> MonthlyMetrics {
        MonthlyMetrics {
            monthly_income: income,
            monthly_expenses: expenses,
            monthly_investments: investments,
            monthly_loans: loans,
            total_outflow: expenses + investments + loans,
        }
    }

    #[test]
    fn test_projection_matches_scenario() {
        // Salary 50000, Food 10000, Gold SIP 5000
        let m = metrics(50000.0, 10000.0, 5000.0, 0.0);
        let projection = compute_savings(&m, 75.0);

        assert!(!projection.has_no_data);
        assert_eq!(projection.current_savings, 35000.0);
        assert_eq!(projection.current_savings_percent, 70.0);
        assert_eq!(projection.potential_savings_percent, 75.0);
        assert_eq!(projection.additional_savings_amount, 2500.0);
        assert_eq!(projection.savings_percent_diff, 5.0);
    }

    #[test]
    fn test_zero_income_suppresses_projection() {
        let m = metrics(0.0, 10000.0, 0.0, 0.0);
        let projection = compute_savings(&m, 12.0);
        assert!(projection.has_no_data);
        assert_eq!(projection.current_savings, 0.0);
    }

    #[test]
    fn test_zero_outflow_suppresses_projection() {
        let m = metrics(50000.0, 0.0, 0.0, 0.0);
        let projection = compute_savings(&m, 12.0);
        assert!(projection.has_no_data);
    }

    #[test]
    fn test_negative_savings_is_displayable() {
        let m = metrics(10000.0, 12000.0, 0.0, 0.0);
        let projection = compute_savings(&m, 5.0);
        assert!(!projection.has_no_data);
        assert_eq!(projection.current_savings, -2000.0);
        assert_eq!(projection.current_savings_percent, -20.0);
    }

    #[test]
    fn test_current_percent_guards_denominator() {
        let m = metrics(0.0, 0.0, 0.0, 0.0);
        assert_eq!(current_percent(&m), 0.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(70.04), 70.0);
        assert_eq!(round1(70.05), 70.1);
        assert_eq!(round1(-19.96), -20.0);
    }

    #[test]
    fn test_roll_uplift_bounds() {
        for _ in 0..100 {
            let rolled = roll_uplift(70.0);
            assert!(rolled >= 70.0 + MIN_UPLIFT);
            assert!(rolled <= 70.0 + MAX_UPLIFT);
            // One decimal place
            assert_eq!(rolled, round1(rolled));
        }
    }
}
