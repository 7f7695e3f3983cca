//! Entry classification and display-name normalization
//!
//! New entries carry an explicit [`EntryKind`] chosen at creation time, so the
//! steady-state classifier only derives the aggregation bucket and a merged
//! display name. The keyword inference in [`classify_legacy`] reproduces the
//! buckets of the previous string-encoded storage scheme ("Expense:" name
//! prefix plus keyword search) and is run once per row at import time, never
//! on reads.

use tracing::warn;

use crate::models::{ClassifiedEntry, EntryKind, FinancialEntry, InvestmentKind, LoanKind};

/// Name prefix that marked an outflow entry in the legacy encoding
pub const EXPENSE_PREFIX: &str = "expense:";

/// Display name for entries whose name is missing or empty
pub const FALLBACK_INCOME_NAME: &str = "Income";

/// Canonical name for the merged salary aliases
pub const CANONICAL_SALARY: &str = "Salary";

/// Names that collapse to [`CANONICAL_SALARY`], compared case-insensitively
const SALARY_ALIASES: [&str; 3] = ["salary", "monthly income", "monthly salary"];

/// Investment keywords checked before loan keywords, in order.
/// Each carries the variant the hit selects.
const INVESTMENT_KEYWORDS: [(&str, InvestmentKind); 9] = [
    ("stock", InvestmentKind::Stocks),
    ("mutual", InvestmentKind::MutualFund),
    ("sip", InvestmentKind::Sip),
    ("investment", InvestmentKind::Other),
    ("crypto", InvestmentKind::Crypto),
    ("gold", InvestmentKind::Gold),
    ("fd", InvestmentKind::FixedDeposit),
    ("deposit", InvestmentKind::FixedDeposit),
    ("bond", InvestmentKind::Bond),
];

/// Loan keywords, checked only when no investment keyword matched
const LOAN_KEYWORDS: [&str; 2] = ["loan", "emi"];

/// Result of running the legacy inference over one string-encoded row
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyClassification {
    pub kind: EntryKind,
    pub display_name: String,
}

/// Classify a legacy string-encoded row into an explicit kind
///
/// Rules, first match wins:
/// 1. A case-insensitive `"Expense:"` name prefix marks an outflow; anything
///    else is income.
/// 2. Within outflows, an explicit `type_hint` of "loan" (set by the loan
///    creation flow) bypasses keyword inference. Otherwise investment
///    keywords are checked before loan keywords, so "Gold Loan EMI" lands in
///    Investment. No keyword hit leaves the row an Expense.
/// 3. Salary-alias names collapse to the canonical "Salary".
///
/// A missing or empty name falls back to an income entry named "Income".
pub fn classify_legacy(raw_name: &str, type_hint: Option<&str>) -> LegacyClassification {
    let trimmed = raw_name.trim();
    if trimmed.is_empty() {
        return LegacyClassification {
            kind: EntryKind::Income,
            display_name: FALLBACK_INCOME_NAME.to_string(),
        };
    }

    let lower = trimmed.to_lowercase();
    if !lower.starts_with(EXPENSE_PREFIX) {
        return LegacyClassification {
            kind: EntryKind::Income,
            display_name: canonical_display_name(trimmed),
        };
    }

    // The prefix is pure ASCII, so byte-offset stripping is safe.
    let stripped = trimmed[EXPENSE_PREFIX.len()..].trim();
    if stripped.is_empty() {
        return LegacyClassification {
            kind: EntryKind::Expense,
            display_name: "Expense".to_string(),
        };
    }

    let display_name = stripped.to_string();

    let hinted_loan = type_hint
        .map(|h| h.trim().eq_ignore_ascii_case("loan"))
        .unwrap_or(false);
    if hinted_loan {
        return LegacyClassification {
            kind: EntryKind::Loan(infer_loan_kind(stripped)),
            display_name,
        };
    }

    let stripped_lower = stripped.to_lowercase();
    for (keyword, kind) in INVESTMENT_KEYWORDS {
        if stripped_lower.contains(keyword) {
            return LegacyClassification {
                kind: EntryKind::Investment(kind),
                display_name,
            };
        }
    }

    if LOAN_KEYWORDS.iter().any(|kw| stripped_lower.contains(kw)) {
        return LegacyClassification {
            kind: EntryKind::Loan(infer_loan_kind(stripped)),
            display_name,
        };
    }

    LegacyClassification {
        kind: EntryKind::Expense,
        display_name,
    }
}

/// Pick a loan variant from words in the name, defaulting to Other
fn infer_loan_kind(name: &str) -> LoanKind {
    let lower = name.to_lowercase();
    if lower.contains("home") || lower.contains("house") || lower.contains("mortgage") {
        LoanKind::Home
    } else if lower.contains("car") || lower.contains("bike") || lower.contains("vehicle") {
        LoanKind::Vehicle
    } else if lower.contains("education") || lower.contains("student") {
        LoanKind::Education
    } else if lower.contains("personal") {
        LoanKind::Personal
    } else {
        LoanKind::Other
    }
}

/// Merge salary aliases into the canonical display name
pub fn canonical_display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return FALLBACK_INCOME_NAME.to_string();
    }
    let lower = trimmed.to_lowercase();
    if SALARY_ALIASES.contains(&lower.as_str()) {
        return CANONICAL_SALARY.to_string();
    }
    trimmed.to_string()
}

/// Amount that participates in sums: non-finite and negative amounts count
/// as zero but the entry stays in the list
fn countable_amount(entry: &FinancialEntry) -> f64 {
    if entry.amount.is_finite() && entry.amount >= 0.0 {
        entry.amount
    } else {
        warn!(
            entry_id = entry.id,
            name = %entry.name,
            amount = entry.amount,
            "Malformed amount, excluded from sums"
        );
        0.0
    }
}

/// Classify a single stored entry
pub fn classify(entry: FinancialEntry) -> ClassifiedEntry {
    let category = entry.kind.category();
    let display_name = canonical_display_name(&entry.name);
    let countable_amount = countable_amount(&entry);
    ClassifiedEntry {
        entry,
        category,
        display_name,
        countable_amount,
    }
}

/// Classify a list of entries and collapse alias duplicates
///
/// Entries whose names merged into the same canonical alias (repeated
/// onboarding passes submit "Salary" and "Monthly Income" side by side)
/// collapse to a single entry; the larger amount wins, as the more
/// authoritative submission. Resolution is by magnitude, not timestamp.
/// Non-alias entries sharing a name are left alone; the breakdown groups
/// them instead.
pub fn classify_all(entries: Vec<FinancialEntry>) -> Vec<ClassifiedEntry> {
    let mut classified: Vec<ClassifiedEntry> = entries.into_iter().map(classify).collect();

    let mut winner: Option<usize> = None;
    for (i, e) in classified.iter().enumerate() {
        if e.display_name != CANONICAL_SALARY {
            continue;
        }
        match winner {
            None => winner = Some(i),
            Some(w) => {
                if e.countable_amount > classified[w].countable_amount {
                    winner = Some(i);
                }
            }
        }
    }
    if let Some(w) = winner {
        let keep_id = classified[w].entry.id;
        classified.retain(|e| e.display_name != CANONICAL_SALARY || e.entry.id == keep_id);
    }

    classified
}
