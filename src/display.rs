use handlebars::Handlebars;

use crate::collection::BadgeCollection;
use crate::error::Result;
use crate::model::RenderContext;

/// The page region badges render into.
///
/// Starts hidden so unrendered template syntax is never shown. Only a
/// successful render of a non-empty badge list replaces the markup and
/// reveals the panel.
#[derive(Debug, Clone, Default)]
pub struct BadgePanel {
    markup: String,
    visible: bool,
}

impl BadgePanel {
    /// A hidden, empty panel.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// A hidden panel with pre-existing markup.
    pub fn with_markup(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            visible: false,
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn apply(&mut self, markup: String) {
        self.markup = markup;
        self.visible = true;
    }
}

/// Render the badge template against the joined collection.
pub(crate) fn render_badge_markup(
    template: &str,
    collection: &BadgeCollection,
) -> Result<String> {
    let handlebars = Handlebars::new();
    let context = RenderContext {
        badgeclasses: collection.badge_classes(),
    };
    Ok(handlebars.render_template(template, &context)?)
}
