//! Dashboard command

use std::collections::HashMap;

use anyhow::Result;
use nestegg_core::dashboard::{build_dashboard_with_limit, refresh_potential};
use nestegg_core::db::Database;

pub fn cmd_dashboard(db: &Database, user_id: &str, refresh: bool, limit: usize) -> Result<()> {
    if refresh {
        match refresh_potential(db, user_id)? {
            Some(record) => println!(
                "🔄 Potential savings rate re-rolled: {:.1}% (v{})",
                record.percent, record.version
            ),
            None => println!("🔄 Nothing to refresh yet - add income and spending first"),
        }
    }

    // No recommendation service on the CLI path; rows show the analysing
    // placeholder instead of estimates.
    let estimates: HashMap<String, f64> = HashMap::new();
    let dashboard = build_dashboard_with_limit(db, user_id, limit, &estimates)?;

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 Nestegg Dashboard           │");
    println!("╰─────────────────────────────────────────╯");
    println!();

    if let Some(nudge) = &dashboard.nudge {
        println!("  👋 {}", nudge);
        if let Some(step) = dashboard.resume_step {
            println!("     (setup resumes at step {})", step);
        }
        println!();
    }

    println!("  Income:       {:>12.2}", dashboard.metrics.monthly_income);
    println!(
        "  Expenses:     {:>12.2}",
        dashboard.metrics.monthly_expenses
    );
    println!(
        "  Investments:  {:>12.2}",
        dashboard.metrics.monthly_investments
    );
    println!("  Loans:        {:>12.2}", dashboard.metrics.monthly_loans);
    println!("  Outflow:      {:>12.2}", dashboard.metrics.total_outflow);
    println!();

    if dashboard.savings.has_no_data {
        println!("  📈 Savings rate: (not enough data yet)");
    } else {
        println!(
            "  📈 Savings: {:.2} ({:.1}%)",
            dashboard.savings.current_savings, dashboard.savings.current_savings_percent
        );
        println!(
            "  🎯 Potential: {:.1}% (+{:.1} pts, ~{:.0} more/mo)",
            dashboard.savings.potential_savings_percent,
            dashboard.savings.savings_percent_diff,
            dashboard.savings.additional_savings_amount
        );
    }

    if !dashboard.categories.is_empty() {
        println!();
        println!("  Top spending categories:");
        for row in &dashboard.categories {
            let estimate = match row.estimated_saving {
                Some(saving) => format!("save ~{:.0}", saving),
                None => "analysing…".to_string(),
            };
            println!(
                "    {:<24} {:>10.2}  {:>5.1}%  {}",
                row.label, row.amount, row.percentage, estimate
            );
        }
    }

    println!();
    Ok(())
}
