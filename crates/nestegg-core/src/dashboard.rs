//! Dashboard assembly: category breakdown plus the full dashboard read
//!
//! Everything here is derived from the current entry list on every call.
//! The only write is the one-time persistence of the potential-savings rate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify::classify_all;
use crate::db::Database;
use crate::error::Result;
use crate::metrics::aggregate;
use crate::models::{CategoryRow, ClassifiedEntry, MonthlyMetrics, PotentialSavings, SavingsProjection};
use crate::onboarding::OnboardingState;
use crate::savings::{self, compute_savings, current_percent, roll_uplift};

/// Spending categories shown before the caller's "show more" toggle
pub const DEFAULT_BREAKDOWN_LIMIT: usize = 3;

/// The complete dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub metrics: MonthlyMetrics,
    pub savings: SavingsProjection,
    pub completeness: OnboardingState,
    /// Wizard step to resume at; absent once setup is complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_step: Option<u8>,
    /// Nudge copy; absent when the projection is rendered instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nudge: Option<String>,
    pub categories: Vec<CategoryRow>,
}

/// Pick a display icon for a category label
///
/// Keyword routing over the label, same shape as the legacy keyword
/// classifier; unknown labels get the generic wallet.
pub fn icon_for(label: &str) -> &'static str {
    let lower = label.to_lowercase();

    if lower.contains("food") || lower.contains("grocer") || lower.contains("dining") {
        return "utensils";
    }
    if lower.contains("rent") || lower.contains("home") || lower.contains("house") {
        return "home";
    }
    if lower.contains("travel")
        || lower.contains("fuel")
        || lower.contains("transport")
        || lower.contains("cab")
    {
        return "car";
    }
    if lower.contains("loan") || lower.contains("emi") {
        return "landmark";
    }
    if lower.contains("gold")
        || lower.contains("stock")
        || lower.contains("sip")
        || lower.contains("fund")
        || lower.contains("invest")
    {
        return "trending-up";
    }
    if lower.contains("health") || lower.contains("medic") || lower.contains("insurance") {
        return "heart-pulse";
    }
    if lower.contains("shop") {
        return "shopping-bag";
    }

    "wallet"
}

/// Build the ranked top-N spending-category breakdown
///
/// Outflow entries are grouped by display name and ranked by amount; each
/// row carries its share of total outflow. Saving estimates come from the
/// external recommendation source untouched; a missing estimate stays None
/// so the UI can show its "analysing" placeholder.
pub fn build_category_breakdown(
    entries: &[ClassifiedEntry],
    limit: usize,
    estimates: &HashMap<String, f64>,
) -> Vec<CategoryRow> {
    let total_outflow: f64 = entries
        .iter()
        .filter(|e| e.category.is_outflow())
        .map(|e| e.countable_amount)
        .sum();
    if total_outflow <= 0.0 {
        return Vec::new();
    }

    let mut groups: HashMap<&str, f64> = HashMap::new();
    for entry in entries.iter().filter(|e| e.category.is_outflow()) {
        *groups.entry(entry.display_name.as_str()).or_default() += entry.countable_amount;
    }

    let mut rows: Vec<CategoryRow> = groups
        .into_iter()
        .map(|(label, amount)| CategoryRow {
            icon: icon_for(label).to_string(),
            percentage: savings::round1(amount / total_outflow * 100.0),
            estimated_saving: estimates.get(label).copied(),
            label: label.to_string(),
            amount,
        })
        .collect();

    // Descending by amount, label as deterministic tie-break
    rows.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    rows.truncate(limit);
    rows
}

/// Resolve the potential rate for a complete dashboard: return the stored
/// record or roll and persist it on the first build
fn resolve_potential(db: &Database, user_id: &str, metrics: &MonthlyMetrics) -> Result<f64> {
    if let Some(record) = db.get_potential_savings(user_id)? {
        return Ok(record.percent);
    }
    let rolled = roll_uplift(current_percent(metrics));
    let stored = db.set_potential_savings(user_id, rolled, 1)?;
    Ok(stored.percent)
}

/// Build the full dashboard for a user
///
/// A store failure propagates as an error so the caller can tell "failed to
/// load" apart from a legitimately empty entry list.
pub fn build_dashboard(
    db: &Database,
    user_id: &str,
    estimates: &HashMap<String, f64>,
) -> Result<Dashboard> {
    build_dashboard_with_limit(db, user_id, DEFAULT_BREAKDOWN_LIMIT, estimates)
}

/// Build the dashboard with a caller-chosen breakdown size (the "show all
/// categories" toggle lives in the client, which re-requests with a higher
/// limit)
pub fn build_dashboard_with_limit(
    db: &Database,
    user_id: &str,
    limit: usize,
    estimates: &HashMap<String, f64>,
) -> Result<Dashboard> {
    let entries = db.list_entries(user_id)?;
    let classified = classify_all(entries);
    let metrics = aggregate(&classified);
    let completeness = OnboardingState::from_metrics(&metrics);

    let savings = if completeness.is_complete() {
        let potential = resolve_potential(db, user_id, &metrics)?;
        compute_savings(&metrics, potential)
    } else {
        SavingsProjection::no_data()
    };

    let categories = build_category_breakdown(&classified, limit, estimates);

    Ok(Dashboard {
        metrics,
        savings,
        resume_step: completeness.resume_step(),
        nudge: completeness.nudge().map(str::to_string),
        completeness,
        categories,
    })
}

/// Explicit recomputation event: re-roll the potential rate and bump the
/// stored version
///
/// Returns None when the user does not yet have both income and spending;
/// there is nothing meaningful to base the roll on.
pub fn refresh_potential(db: &Database, user_id: &str) -> Result<Option<PotentialSavings>> {
    let entries = db.list_entries(user_id)?;
    let classified = classify_all(entries);
    let metrics = aggregate(&classified);

    if !OnboardingState::from_metrics(&metrics).is_complete() {
        return Ok(None);
    }

    let version = db
        .get_potential_savings(user_id)?
        .map(|record| record.version + 1)
        .unwrap_or(1);
    let rolled = roll_uplift(current_percent(&metrics));
    let stored = db.set_potential_savings(user_id, rolled, version)?;
    Ok(Some(stored))
}
