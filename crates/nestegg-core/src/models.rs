//! Domain models for Nestegg

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often an entry's amount recurs
///
/// Amounts are aggregated as entered regardless of frequency; annual entries
/// are recorded as their monthly contribution. The field is stored so the
/// normalization rule can change without a schema migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Annual,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "annual" | "yearly" => Ok(Self::Annual),
            _ => Err(format!("Unknown frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What an investment contribution goes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentKind {
    Stocks,
    MutualFund,
    Sip,
    Crypto,
    Gold,
    FixedDeposit,
    Bond,
    #[default]
    Other,
}

impl InvestmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stocks => "stocks",
            Self::MutualFund => "mutual_fund",
            Self::Sip => "sip",
            Self::Crypto => "crypto",
            Self::Gold => "gold",
            Self::FixedDeposit => "fixed_deposit",
            Self::Bond => "bond",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for InvestmentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stocks" | "stock" => Ok(Self::Stocks),
            "mutual_fund" | "mutual" => Ok(Self::MutualFund),
            "sip" => Ok(Self::Sip),
            "crypto" => Ok(Self::Crypto),
            "gold" => Ok(Self::Gold),
            "fixed_deposit" | "fd" => Ok(Self::FixedDeposit),
            "bond" => Ok(Self::Bond),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown investment kind: {}", s)),
        }
    }
}

/// What a loan obligation is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    Home,
    Vehicle,
    Personal,
    Education,
    #[default]
    Other,
}

impl LoanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Vehicle => "vehicle",
            Self::Personal => "personal",
            Self::Education => "education",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for LoanKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "vehicle" | "car" | "auto" => Ok(Self::Vehicle),
            "personal" => Ok(Self::Personal),
            "education" | "student" => Ok(Self::Education),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown loan kind: {}", s)),
        }
    }
}

/// The broad bucket an entry aggregates into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryCategory {
    Income,
    Expense,
    Investment,
    Loan,
}

impl EntryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Investment => "investment",
            Self::Loan => "loan",
        }
    }

    /// Whether amounts in this category leave the monthly income
    pub fn is_outflow(&self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl std::fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of a financial entry, assigned once when the entry is created
///
/// New entries carry an explicit kind; the string-inference path in
/// `classify` exists only to migrate legacy rows that encoded the kind in
/// their name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "detail", rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
    Investment(InvestmentKind),
    Loan(LoanKind),
}

impl EntryKind {
    pub fn category(&self) -> EntryCategory {
        match self {
            Self::Income => EntryCategory::Income,
            Self::Expense => EntryCategory::Expense,
            Self::Investment(_) => EntryCategory::Investment,
            Self::Loan(_) => EntryCategory::Loan,
        }
    }

    /// Storage column value for the kind
    pub fn kind_str(&self) -> &'static str {
        self.category().as_str()
    }

    /// Storage column value for the variant detail, if any
    pub fn detail_str(&self) -> Option<&'static str> {
        match self {
            Self::Income | Self::Expense => None,
            Self::Investment(kind) => Some(kind.as_str()),
            Self::Loan(kind) => Some(kind.as_str()),
        }
    }

    /// Rebuild a kind from its storage columns
    pub fn from_columns(kind: &str, detail: Option<&str>) -> std::result::Result<Self, String> {
        match kind.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "investment" => {
                let inner = detail.map(str::parse).transpose()?.unwrap_or_default();
                Ok(Self::Investment(inner))
            }
            "loan" => {
                let inner = detail.map(str::parse).transpose()?.unwrap_or_default();
                Ok(Self::Loan(inner))
            }
            _ => Err(format!("Unknown entry kind: {}", kind)),
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail_str() {
            Some(detail) => write!(f, "{} ({})", self.kind_str(), detail),
            None => write!(f, "{}", self.kind_str()),
        }
    }
}

/// A single user-submitted financial line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialEntry {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    /// Monthly amount, non-negative
    pub amount: f64,
    pub frequency: Frequency,
    /// Primary income source / main expense, set by onboarding
    pub is_primary: bool,
    /// Outstanding principal (loan entries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<f64>,
    /// Annual interest rate in percent (loan entries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A new entry to be created (before store insertion)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFinancialEntry {
    pub name: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub amount: f64,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub principal: Option<f64>,
    #[serde(default)]
    pub interest_rate: Option<f64>,
}

/// A partial update to an existing entry; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: Option<EntryKind>,
    pub amount: Option<f64>,
    pub frequency: Option<Frequency>,
    pub is_primary: Option<bool>,
    pub principal: Option<f64>,
    pub interest_rate: Option<f64>,
}

/// An entry with its derived aggregation bucket and grouping name
///
/// Derived on every read, never stored or sent over the wire.
#[derive(Debug, Clone)]
pub struct ClassifiedEntry {
    pub entry: FinancialEntry,
    pub category: EntryCategory,
    /// Alias-merged name used for grouping and display
    pub display_name: String,
    /// Amount that participates in sums; 0 for malformed amounts
    pub countable_amount: f64,
}

/// Monthly totals per category, recomputed on every read
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_investments: f64,
    pub monthly_loans: f64,
    /// expenses + investments + loans
    pub total_outflow: f64,
}

impl MonthlyMetrics {
    pub fn has_income(&self) -> bool {
        self.monthly_income > 0.0
    }

    pub fn has_spending(&self) -> bool {
        self.total_outflow > 0.0
    }
}

/// Current and potential savings figures for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    /// income - outflow; negative when spending exceeds income
    pub current_savings: f64,
    pub current_savings_percent: f64,
    pub potential_savings_percent: f64,
    /// Extra amount saved per month at the potential rate
    pub additional_savings_amount: f64,
    pub savings_percent_diff: f64,
    /// Set when income or outflow is zero; all figures are suppressed
    pub has_no_data: bool,
}

impl SavingsProjection {
    /// Projection for a user without enough data to show meaningful figures
    pub fn no_data() -> Self {
        Self {
            has_no_data: true,
            ..Self::default()
        }
    }
}

/// The persisted potential-savings record, written once per user
///
/// The percent is a motivational heuristic, not the output of spend
/// optimization. Once stored it must be returned unchanged by every read;
/// only an explicit refresh re-rolls it and bumps the version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialSavings {
    pub percent: f64,
    pub version: i64,
    pub generated_at: DateTime<Utc>,
}

/// A row in the ranked spending-category breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub label: String,
    pub icon: String,
    pub amount: f64,
    /// Share of total outflow, in percent
    pub percentage: f64,
    /// Per-category saving estimate passed through from the recommendation
    /// source; None renders as the "analysing" placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_saving: Option<f64>,
}
