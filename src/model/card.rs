//! Card content model.
//!
//! A card is one unit of displayed content inside a paginated strip:
//! a title, an optional subtitle, a plain-text body, and optional
//! external links revealed in the drawer. Cards are immutable once
//! built; their identity is their position in the owning sequence.

use serde::Deserialize;

/// Default accent gradient endpoints, light and dark mode.
pub const DEFAULT_ACCENT: Accent = Accent {
    light: [0x00, 0x88, 0xff],
    dark: [0x55, 0xbb, 0xff],
};

/// Per-card accent color, one RGB triple per theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Accent {
    /// Accent used when the light palette is active.
    pub light: [u8; 3],
    /// Accent used when the dark palette is active.
    pub dark: [u8; 3],
}

impl Default for Accent {
    fn default() -> Self {
        DEFAULT_ACCENT
    }
}

/// External links attached to a card, shown in its drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardLinks {
    /// Source repository URL.
    #[serde(default)]
    pub source: Option<String>,

    /// Live demo / deployed site URL.
    #[serde(default)]
    pub demo: Option<String>,
}

impl CardLinks {
    /// True when neither link is present.
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.demo.is_none()
    }
}

/// One unit of displayed content within a paginated strip.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    /// Card heading.
    pub title: String,

    /// Secondary heading line, rendered under the title.
    #[serde(default)]
    pub subtitle: Option<String>,

    /// Plain-text body. May be longer than the card face; the drawer
    /// shows it in full.
    pub body: String,

    /// Accent color for the card face.
    #[serde(default)]
    pub accent: Accent,

    /// External links shown in the drawer.
    #[serde(default)]
    pub links: CardLinks,
}

impl Card {
    /// Build a card from a title and body, with defaults elsewhere.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            body: body.into(),
            accent: Accent::default(),
            links: CardLinks::default(),
        }
    }

    /// Attach a subtitle.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Attach a source repository link.
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.links.source = Some(url.into());
        self
    }

    /// Attach a demo link.
    pub fn with_demo(mut self, url: impl Into<String>) -> Self {
        self.links.demo = Some(url.into());
        self
    }

    /// Override the accent color.
    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }
}
