//! Page configuration.
//!
//! One section per behavior. Every field has a default matching the clinic
//! site, so a JSON config only needs the keys it changes. Durations are in
//! milliseconds.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use webdom::{Edges, EdgesParseError, SelectorError, SelectorList};

use crate::validation::Messages;

/// Errors raised while loading or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid selector for {field}: {source}")]
    Selector {
        /// Dotted path of the offending setting.
        field: &'static str,
        #[source]
        source: SelectorError,
    },

    #[error("Invalid root margin '{value}': {source}")]
    RootMargin {
        value: String,
        #[source]
        source: EdgesParseError,
    },
}

/// Parse a configured selector, tagging errors with the setting's name.
pub(crate) fn selector(field: &'static str, value: &str) -> Result<SelectorList, ConfigError> {
    SelectorList::parse(value).map_err(|source| ConfigError::Selector { field, source })
}

/// Language of the user-facing texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll_to_top: ScrollToTopConfig,
    pub header: HeaderConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub validation: ValidationConfig,
    pub button_loading: ButtonLoadingConfig,
    pub fade_in: FadeInConfig,
    pub mobile_menu: MobileMenuConfig,
}

impl PageConfig {
    /// Load from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults with texts in `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        Self::default().locale(locale)
    }

    /// Switch every user-facing text to `locale`.
    pub fn locale(mut self, locale: Locale) -> Self {
        match locale {
            Locale::English => {
                self.scroll_to_top.label = ScrollToTopConfig::default().label;
                self.validation.messages = Messages::english();
            }
            Locale::Portuguese => {
                self.scroll_to_top.label = "Voltar ao topo".into();
                self.validation.messages = Messages::portuguese();
            }
        }
        self
    }

    pub fn messages(mut self, messages: Messages) -> Self {
        self.validation.messages = messages;
        self
    }

    pub fn scroll_to_top_threshold(mut self, px: i32) -> Self {
        self.scroll_to_top.threshold = px;
        self
    }

    pub fn header_threshold(mut self, px: i32) -> Self {
        self.header.threshold = px;
        self
    }

    pub fn header_offset(mut self, px: i32) -> Self {
        self.smooth_scroll.header_offset = px;
        self
    }

    pub fn loading_fallback(mut self, fallback: Duration) -> Self {
        self.button_loading.fallback_ms = u64::try_from(fallback.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn menu_stagger(mut self, stagger: Duration) -> Self {
        self.mobile_menu.stagger_ms = u64::try_from(stagger.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrollToTopConfig {
    /// Scroll offset above which the control shows.
    pub threshold: i32,
    /// `aria-label` of the control.
    pub label: String,
    pub class: String,
    pub icon: String,
    pub visible_class: String,
}

impl Default for ScrollToTopConfig {
    fn default() -> Self {
        Self {
            threshold: 300,
            label: "Back to top".into(),
            class: "scroll-to-top".into(),
            icon: "fas fa-arrow-up".into(),
            visible_class: "visible".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    pub threshold: i32,
    pub class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header-container".into(),
            threshold: 100,
            class: "scrolled".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub anchors: String,
    /// Height of the fixed header, subtracted from the target's top.
    pub header_offset: i32,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            anchors: r##"a[href^="#"]"##.into(),
            header_offset: 80,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub forms: String,
    pub fields: String,
    pub messages: Messages,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            forms: "form".into(),
            fields: "input, select, textarea".into(),
            messages: Messages::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonLoadingConfig {
    pub forms: String,
    pub submit: String,
    pub class: String,
    pub spinner_class: String,
    /// Delay before a stuck button is restored.
    pub fallback_ms: u64,
}

impl ButtonLoadingConfig {
    pub fn fallback(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }
}

impl Default for ButtonLoadingConfig {
    fn default() -> Self {
        Self {
            forms: "form".into(),
            submit: r#"button[type="submit"], input[type="submit"]"#.into(),
            class: "loading".into(),
            spinner_class: "loading-spinner".into(),
            fallback_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub targets: String,
    /// Visible fraction required to count as in view.
    pub threshold: f64,
    /// CSS-style margin applied to the viewport, e.g. `0px 0px -50px 0px`.
    pub root_margin: String,
    pub class: String,
}

impl FadeInConfig {
    pub fn root_margin(&self) -> Result<Edges, ConfigError> {
        self.root_margin
            .parse()
            .map_err(|source| ConfigError::RootMargin {
                value: self.root_margin.clone(),
                source,
            })
    }
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            targets: ".card, .service-card, .testimonial-card, .gallery-card".into(),
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            class: "fade-in".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MobileMenuConfig {
    pub toggler: String,
    pub menu: String,
    /// Links inside the menu that close it.
    pub links: String,
    /// Items revealed one after another when the menu opens.
    pub items: String,
    pub show_class: String,
    pub stagger_ms: u64,
}

impl MobileMenuConfig {
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self {
            toggler: ".navbar-toggler".into(),
            menu: "#mobileMenu".into(),
            links: "a".into(),
            items: ".nav-item".into(),
            show_class: "show".into(),
            stagger_ms: 50,
        }
    }
}
