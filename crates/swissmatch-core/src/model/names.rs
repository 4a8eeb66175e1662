// crates/swissmatch-core/src/model/names.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale selector for names.
///
/// `Native` is the spelling used in the place's own language area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Native,
    De,
    Fr,
    It,
    Rt,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::Native, Locale::De, Locale::Fr, Locale::It, Locale::Rt];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Native => "native",
            Locale::De => "de",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Rt => "rt",
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" => Ok(Locale::Native),
            "de" => Ok(Locale::De),
            "fr" => Ok(Locale::Fr),
            "it" => Ok(Locale::It),
            "rt" => Ok(Locale::Rt),
            _ => Err(Error::invalid(format!("invalid locale {s:?}"))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four official languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "rt")]
    Romansh,
}

/// A native name plus its optional translations.
///
/// Missing translations fall back to the native spelling, which is what the
/// postal data does for places that only have one official name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Names {
    pub native: String,
    #[serde(default)]
    pub de: Option<String>,
    #[serde(default)]
    pub fr: Option<String>,
    #[serde(default)]
    pub it: Option<String>,
    #[serde(default)]
    pub rt: Option<String>,
}

impl Names {
    /// A name without translations.
    pub fn native(name: impl Into<String>) -> Self {
        Names {
            native: name.into(),
            de: None,
            fr: None,
            it: None,
            rt: None,
        }
    }

    /// Builder-style helper for fixtures and loaders.
    pub fn with(mut self, locale: Locale, name: impl Into<String>) -> Self {
        let name = Some(name.into());
        match locale {
            Locale::Native => self.native = name.unwrap_or_default(),
            Locale::De => self.de = name,
            Locale::Fr => self.fr = name,
            Locale::It => self.it = name,
            Locale::Rt => self.rt = name,
        }
        self
    }

    /// The name in `locale`, or the native name when no translation exists.
    pub fn get(&self, locale: Locale) -> &str {
        let translated = match locale {
            Locale::Native => None,
            Locale::De => self.de.as_deref(),
            Locale::Fr => self.fr.as_deref(),
            Locale::It => self.it.as_deref(),
            Locale::Rt => self.rt.as_deref(),
        };
        translated.unwrap_or(&self.native)
    }

    /// Distinct spellings, native first, in locale order.
    pub fn variants(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(5);
        for locale in Locale::ALL {
            let name = self.get(locale);
            if !out.contains(&name) {
                out.push(name);
            }
        }
        out
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.native)
    }
}
