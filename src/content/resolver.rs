use log::debug;

use crate::content::model::{Localized, LocalizedString, LocalizedStringList};
use crate::errors::ContentError;
use crate::language_utils::Locale;

/// Resolves localized values for a display locale.
///
/// The requested locale wins; otherwise the fallback locale is used; if
/// neither holds a value the lookup fails with `MissingLocale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedTextResolver {
    fallback: Locale,
}

impl Default for LocalizedTextResolver {
    fn default() -> Self {
        Self::new(Locale::En)
    }
}

impl LocalizedTextResolver {
    /// Create a resolver with the given fallback locale
    pub fn new(fallback: Locale) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> Locale {
        self.fallback
    }

    /// Borrow the value for `locale`, falling back when absent
    pub fn resolve<'a, T>(&self, value: &'a Localized<T>, locale: Locale) -> Result<&'a T, ContentError> {
        if let Some(resolved) = value.get(locale) {
            return Ok(resolved);
        }

        match value.get(self.fallback) {
            Some(resolved) => {
                debug!("No '{}' value, using fallback '{}'", locale, self.fallback);
                Ok(resolved)
            }
            None => Err(ContentError::MissingLocale {
                requested: locale,
                fallback: self.fallback,
            }),
        }
    }

    /// Resolve a localized string to an owned display string
    pub fn resolve_text(&self, value: &LocalizedString, locale: Locale) -> Result<String, ContentError> {
        self.resolve(value, locale).cloned()
    }

    /// Resolve a localized list to its items
    pub fn resolve_list(&self, value: &LocalizedStringList, locale: Locale) -> Result<Vec<String>, ContentError> {
        self.resolve(value, locale).cloned()
    }
}
