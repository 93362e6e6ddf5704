//! Query parameter vocabulary shared by the HTTP surface, the CLI, and the
//! catalog engine.
//!
//! Parsing here is deliberately lenient: a listing request must never fail
//! because of a malformed `page` or `budget` token. Bad tokens degrade to the
//! documented defaults (or to "filter absent") instead.

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Sort order for listing results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    RatingDesc,
    RatingAsc,
    BudgetAsc,
    BudgetDesc,
}

impl SortKey {
    /// Parse a wire token into a sort key. Unrecognized values fall back to
    /// the default (`rating_desc`) rather than failing the request.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "rating_asc" => SortKey::RatingAsc,
            "budget_asc" => SortKey::BudgetAsc,
            "budget_desc" => SortKey::BudgetDesc,
            _ => SortKey::RatingDesc,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::RatingDesc => write!(f, "rating_desc"),
            SortKey::RatingAsc => write!(f, "rating_asc"),
            SortKey::BudgetAsc => write!(f, "budget_asc"),
            SortKey::BudgetDesc => write!(f, "budget_desc"),
        }
    }
}

/// Read-only listing parameters. Never mutated by the engine, never mutate
/// the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParams {
    pub page: u32,
    pub page_size: u32,
    pub location: Option<String>,
    pub treatment: Option<String>,
    pub budget: Option<u8>,
    pub search: Option<String>,
    pub sort: SortKey,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            location: None,
            treatment: None,
            budget: None,
            search: None,
            sort: SortKey::default(),
        }
    }
}

/// Parse a positive integer token, falling back to `default` when the token
/// is missing, non-numeric, or zero.
#[must_use]
pub fn parse_positive(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// Parse a budget-tier token. Empty, non-numeric, and zero tokens all mean
/// "no budget filter"; tier 0 is reserved and not filterable.
#[must_use]
pub fn parse_budget(raw: Option<&str>) -> Option<u8> {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|&b| b > 0)
}

/// Normalize an optional text filter: trim whitespace and treat the empty
/// string as absent.
#[must_use]
pub fn clean_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
