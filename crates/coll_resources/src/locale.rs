use std::fmt;

/// Language of the built-in message tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    ZhHans,
}

impl Locale {
    /// Parses a language tag such as `en-US`, `zh_CN` or `zh-Hans`.
    /// Anything unrecognised maps to English.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        let primary = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Locale::ZhHans,
            _ => Locale::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHans => "zh-Hans",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
