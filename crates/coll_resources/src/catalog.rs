//! Message catalog and the process-wide instance.
//!
//! # Invariants
//! - Resolution never panics; unknown identifiers produce fallback text.
//! - The process-wide catalog is set at most once and is read-only after.

use std::fmt;

use ahash::RandomState;
use hashbrown::HashMap;
use log::{debug, warn};
use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::format::format_template;
use crate::locale::Locale;
use crate::message::MessageId;
use crate::tables;
use crate::util::find_best_match;

/// Environment variable consulted by `CatalogConfig::from_env`.
pub const LOCALE_ENV: &str = "COLL_LOCALE";

static CATALOG: OnceCell<MessageCatalog> = OnceCell::new();

type OverrideMap = HashMap<String, String, RandomState>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("message catalog already installed with locale `{locale}`")]
    AlreadyInstalled { locale: Locale },
}

/// Startup configuration for the message catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    pub locale: Locale,
    /// Templates replacing (or adding to) the built-in table, keyed by
    /// message identifier.
    pub overrides: Vec<(String, String)>,
}

impl CatalogConfig {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: Vec::new(),
        }
    }

    /// Reads the locale from `COLL_LOCALE`, defaulting to English.
    pub fn from_env() -> Self {
        let locale = std::env::var(LOCALE_ENV)
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default();
        Self::new(locale)
    }

    pub fn with_override(mut self, id: impl Into<String>, template: impl Into<String>) -> Self {
        self.overrides.push((id.into(), template.into()));
        self
    }
}

/// Resolves message identifiers to text for one locale.
#[derive(Clone, Debug)]
pub struct MessageCatalog {
    locale: Locale,
    overrides: OverrideMap,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl MessageCatalog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            overrides: HashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut overrides =
            HashMap::with_capacity_and_hasher(config.overrides.len(), RandomState::new());
        for (id, template) in &config.overrides {
            overrides.insert(id.clone(), template.clone());
        }
        Self {
            locale: config.locale,
            overrides,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw template for `id`: an override wins over the built-in table.
    pub fn template(&self, id: &str) -> Option<&str> {
        if let Some(t) = self.overrides.get(id) {
            return Some(t.as_str());
        }
        MessageId::from_name(id).map(|m| m.template(self.locale))
    }

    pub fn resolve(&self, id: &str) -> String {
        self.resolve_with(id, &[])
    }

    pub fn resolve_with(&self, id: &str, args: &[&dyn fmt::Display]) -> String {
        match self.template(id) {
            Some(template) => format_template(template, args),
            None => self.unknown(id),
        }
    }

    fn unknown(&self, id: &str) -> String {
        warn!(
            "event=message_resolve module=resources status=unknown_id id={} locale={}",
            id, self.locale
        );
        let known = MessageId::ALL
            .iter()
            .map(|m| m.name())
            .chain(self.overrides.keys().map(String::as_str));
        match find_best_match(id, known) {
            Some(hint) => format_template(tables::unknown_with_hint(self.locale), &[&id, &hint]),
            None => format_template(tables::unknown(self.locale), &[&id]),
        }
    }
}

/// Installs the process-wide catalog. Only the first call succeeds, and a
/// call made after `catalog()` has lazily initialized is rejected too.
pub fn install(config: CatalogConfig) -> Result<(), CatalogError> {
    let mut installed = false;
    let current = CATALOG.get_or_init(|| {
        installed = true;
        MessageCatalog::from_config(&config)
    });
    if !installed {
        return Err(CatalogError::AlreadyInstalled {
            locale: current.locale(),
        });
    }
    debug!(
        "event=catalog_install module=resources status=ok locale={} overrides={}",
        current.locale(),
        current.overrides.len()
    );
    Ok(())
}

/// The process-wide catalog, initialized from the environment on first use
/// when nothing was installed.
pub fn catalog() -> &'static MessageCatalog {
    CATALOG.get_or_init(|| {
        let config = CatalogConfig::from_env();
        debug!(
            "event=catalog_install module=resources status=lazy locale={}",
            config.locale
        );
        MessageCatalog::from_config(&config)
    })
}

pub fn resolve(id: &str) -> String {
    catalog().resolve(id)
}

pub fn resolve_with(id: &str, args: &[&dyn fmt::Display]) -> String {
    catalog().resolve_with(id, args)
}
