use serde::{Deserialize, Serialize};

/// An earnable badge definition, owned by an issuer tied to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeClass {
    /// Stable reference for this badge class. Earned badges point back
    /// at it by containing this value inside their `badge` field.
    pub edx_href: String,
    pub name: String,
    pub image: String,
    pub description: String,
    /// Whether the learner has earned this badge. Not part of the
    /// server record; filled in when the earned list is joined.
    #[serde(default)]
    pub is_earned: bool,
}

/// Context the badge template is rendered against.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub badgeclasses: &'a [BadgeClass],
}
