//! Nestegg Core Library
//!
//! Shared functionality for the Nestegg savings tracker:
//! - Entry store (SQLite) with per-user financial entries
//! - Entry classifier with legacy string-inference migration path
//! - Monthly aggregation into per-category totals
//! - Savings rate and persisted potential-savings projection
//! - Onboarding completeness derivation
//! - Dashboard assembly with ranked spending breakdown
//! - Legacy CSV import and entry export

pub mod classify;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod export;
pub mod import;
pub mod metrics;
pub mod models;
pub mod onboarding;
pub mod savings;

pub use classify::{classify, classify_all, classify_legacy, LegacyClassification};
pub use dashboard::{
    build_category_breakdown, build_dashboard, build_dashboard_with_limit, refresh_potential,
    Dashboard, DEFAULT_BREAKDOWN_LIMIT,
};
pub use db::Database;
pub use error::{Error, Result};
pub use export::{export_entries, EntryExport, ExportFormat};
pub use import::{import_legacy_csv, LegacyImportStats};
pub use metrics::aggregate;
pub use onboarding::OnboardingState;
pub use savings::{compute_savings, roll_uplift};
