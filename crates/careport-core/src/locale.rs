// SPDX-License-Identifier: AGPL-3.0-or-later
//! Service locales and per-locale value maps

use serde::{Deserialize, Serialize};

/// Locale identifier for localized content fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    Ja,
    Zh,
    En,
}

impl Locale {
    /// Wire and column code for this locale
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::Ja => "ja",
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Display name for the admin UI
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ko => "Korean",
            Self::Ja => "Japanese",
            Self::Zh => "Chinese",
            Self::En => "English",
        }
    }

    /// All locales in column order
    pub const ALL: [Self; 4] = [Self::Ko, Self::Ja, Self::Zh, Self::En];
}

/// One optional slot per locale, iterated in [`Locale::ALL`] order.
///
/// Callers that need a value for every locale substitute
/// [`Document::empty`](crate::ast::Document::empty) for absent rich-text
/// slots; the map itself distinguishes "entirely unset" from "set with some
/// locales blank".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleMap<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ko: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ja: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zh: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    en: Option<T>,
}

impl<T> Default for LocaleMap<T> {
    fn default() -> Self {
        Self {
            ko: None,
            ja: None,
            zh: None,
            en: None,
        }
    }
}

impl<T> LocaleMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: Locale) -> Option<&T> {
        match locale {
            Locale::Ko => self.ko.as_ref(),
            Locale::Ja => self.ja.as_ref(),
            Locale::Zh => self.zh.as_ref(),
            Locale::En => self.en.as_ref(),
        }
    }

    pub fn set(&mut self, locale: Locale, value: T) {
        *self.slot_mut(locale) = Some(value);
    }

    pub fn take(&mut self, locale: Locale) -> Option<T> {
        self.slot_mut(locale).take()
    }

    /// Present entries in column order
    pub fn iter(&self) -> impl Iterator<Item = (Locale, &T)> + '_ {
        Locale::ALL
            .into_iter()
            .filter_map(|locale| self.get(locale).map(|value| (locale, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    fn slot_mut(&mut self, locale: Locale) -> &mut Option<T> {
        match locale {
            Locale::Ko => &mut self.ko,
            Locale::Ja => &mut self.ja,
            Locale::Zh => &mut self.zh,
            Locale::En => &mut self.en,
        }
    }
}

impl LocaleMap<crate::ast::Document> {
    /// Value for one locale, substituting the empty-document sentinel for
    /// absent slots so editors always receive a full locale set.
    pub fn get_or_empty(&self, locale: Locale) -> crate::ast::Document {
        self.get(locale)
            .cloned()
            .unwrap_or_else(crate::ast::Document::empty)
    }
}

impl<T> FromIterator<(Locale, T)> for LocaleMap<T> {
    fn from_iter<I: IntoIterator<Item = (Locale, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (locale, value) in iter {
            map.set(locale, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_column_order() {
        let codes: Vec<&str> = Locale::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes, ["ko", "ja", "zh", "en"]);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Locale::Zh).unwrap(), "\"zh\"");
        let locale: Locale = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(locale, Locale::Ja);
    }

    #[test]
    fn test_map_set_get_iter() {
        let mut map = LocaleMap::new();
        assert!(map.is_empty());

        map.set(Locale::En, "hello");
        map.set(Locale::Ko, "annyeong");
        assert_eq!(map.get(Locale::En), Some(&"hello"));
        assert_eq!(map.get(Locale::Ja), None);
        assert_eq!(map.len(), 2);

        // iteration follows column order, not insertion order
        let entries: Vec<(Locale, &&str)> = map.iter().collect();
        assert_eq!(entries[0].0, Locale::Ko);
        assert_eq!(entries[1].0, Locale::En);
    }

    #[test]
    fn test_rich_map_defaults_to_sentinel() {
        use crate::ast::Document;

        let map: LocaleMap<Document> = LocaleMap::new();
        assert!(map.get(Locale::Ko).is_none());
        assert_eq!(map.get_or_empty(Locale::Ko), Document::empty());
    }

    #[test]
    fn test_map_serde_skips_absent_slots() {
        let map: LocaleMap<String> =
            [(Locale::Ja, "konnichiwa".to_owned())].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "{\"ja\":\"konnichiwa\"}");

        let back: LocaleMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
