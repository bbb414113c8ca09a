use anyhow::{Result, anyhow};
use isolang::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale and ISO language code utilities
///
/// Content is authored in a fixed set of locales. Codes coming from
/// configuration or the command line may be written as ISO 639-1
/// ("en"), ISO 639-2/T ("eng") or ISO 639-2/B ("fre"), in any case and
/// with surrounding whitespace; they are normalized before matching.

/// ISO 639-2/B codes that differ from their ISO 639-2/T counterpart
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// A locale content is authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish
    Es,
    /// English
    #[default]
    En,
}

impl Locale {
    /// Every supported locale, in authoring order
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// ISO 639-1 code used as the key in content files
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Parse any ISO 639 spelling of a supported locale
    pub fn from_code(code: &str) -> Result<Self> {
        let part2t = normalize_to_part2t(code)?;
        match part2t.as_str() {
            "spa" => Ok(Self::Es),
            "eng" => Ok(Self::En),
            _ => Err(anyhow!(
                "Unsupported locale: {} (supported: {})",
                code,
                Self::ALL.iter().map(|l| l.code()).collect::<Vec<_>>().join(", ")
            )),
        }
    }

    /// English name of the language
    pub fn english_name(&self) -> &'static str {
        match Language::from_639_1(self.code()) {
            Some(lang) => lang.to_name(),
            None => self.code(),
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        Language::from_639_1(self.code())
            .and_then(|lang| lang.to_autonym())
            .unwrap_or_else(|| self.english_name())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    PART2B_TO_PART2T
        .iter()
        .find(|(b, _)| *b == code)
        .map(|(_, t)| *t)
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-2 code
fn validate_language_code(code: &str) -> Result<LanguageCodeType> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 if Language::from_639_1(&normalized_code).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&normalized_code).is_some() => Ok(LanguageCodeType::Part2T),
        3 if part2b_to_part2t(&normalized_code).is_some() => Ok(LanguageCodeType::Part2B),
        _ => Err(anyhow!("Invalid language code: {}", code)),
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    match validate_language_code(&normalized_code)? {
        LanguageCodeType::Part1 => Language::from_639_1(&normalized_code)
            .map(|lang| lang.to_639_3().to_string())
            .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code)),
        LanguageCodeType::Part2T => Ok(normalized_code),
        LanguageCodeType::Part2B => part2b_to_part2t(&normalized_code)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Cannot normalize invalid language code: {}", code)),
    }
}
