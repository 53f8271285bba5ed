use serde::{Deserialize, Serialize};

/// Evidence that the learner was awarded a specific badge class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedBadge {
    /// Reference to the badge assertion. Contains the `edx_href` of the
    /// badge class it instantiates as a substring.
    pub badge: String,
}

/// The `{ "results": [...] }` envelope both list endpoints return.
/// Only the first page is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
}
