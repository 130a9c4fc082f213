use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// UI language preference. Owned by the i18n layer; the board only reads and writes the key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl Language {
    /// Lenient parse of a stored value. Anything unrecognised is the default.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse().ok()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn stored_values_round_trip() {
        for lang in Language::iter() {
            let stored = lang.to_string();
            assert_eq!(Language::from_stored(Some(&stored)), lang);
        }
    }

    #[test]
    fn garbage_falls_back_to_portuguese() {
        assert_eq!(Language::from_stored(None), Language::Pt);
        assert_eq!(Language::from_stored(Some("klingon")), Language::Pt);
        assert_eq!(Language::from_stored(Some(" en ")), Language::En);
    }
}
