//! Surface finish of a catalog colour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BrickError, Result};

/// Categorical surface treatment, used as an eligibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    Solid,
    Pearl,
    Metallic,
    Trans,
    Glitter,
    Chrome,
}

/// Keyword rules checked in order against the lower-cased colour name.
/// The first keyword found decides the finish; no match means `Solid`.
pub const FINISH_RULES: [(&str, Finish); 5] = [
    ("pearl", Finish::Pearl),
    ("metallic", Finish::Metallic),
    ("trans", Finish::Trans),
    ("glitter", Finish::Glitter),
    ("chrome", Finish::Chrome),
];

impl Finish {
    pub const ALL: [Finish; 6] = [
        Finish::Solid,
        Finish::Pearl,
        Finish::Metallic,
        Finish::Trans,
        Finish::Glitter,
        Finish::Chrome,
    ];

    /// Classify a catalog display name.
    pub fn classify(name: &str) -> Self {
        let name = name.to_lowercase();
        FINISH_RULES
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map(|&(_, finish)| finish)
            .unwrap_or(Finish::Solid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Finish::Solid => "solid",
            Finish::Pearl => "pearl",
            Finish::Metallic => "metallic",
            Finish::Trans => "trans",
            Finish::Glitter => "glitter",
            Finish::Chrome => "chrome",
        }
    }
}

impl FromStr for Finish {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Finish::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| BrickError::Config {
                message: format!("Unknown finish: {}", s),
                help: Some("Use one of: solid, pearl, metallic, trans, glitter, chrome".to_string()),
            })
    }
}

impl fmt::Display for Finish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of finishes, stored as a bitmask so match policies stay `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FinishSet(u8);

impl FinishSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Finish::ALL.into_iter().collect()
    }

    pub fn only(finish: Finish) -> Self {
        Self::empty().with(finish)
    }

    pub fn with(mut self, finish: Finish) -> Self {
        self.insert(finish);
        self
    }

    pub fn insert(&mut self, finish: Finish) {
        self.0 |= Self::bit(finish);
    }

    pub fn contains(self, finish: Finish) -> bool {
        self.0 & Self::bit(finish) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Finish> {
        Finish::ALL.into_iter().filter(move |f| self.contains(*f))
    }

    fn bit(finish: Finish) -> u8 {
        1 << finish as u8
    }
}

impl FromIterator<Finish> for FinishSet {
    fn from_iter<I: IntoIterator<Item = Finish>>(iter: I) -> Self {
        let mut set = Self::empty();
        for finish in iter {
            set.insert(finish);
        }
        set
    }
}

impl fmt::Display for FinishSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Finish::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_names_are_solid() {
        assert_eq!(Finish::classify("Red"), Finish::Solid);
        assert_eq!(Finish::classify("Dark Bluish Gray"), Finish::Solid);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Finish::classify("TRANS-CLEAR"), Finish::Trans);
        assert_eq!(Finish::classify("Pearl Gold"), Finish::Pearl);
        assert_eq!(Finish::classify("Chrome Gold"), Finish::Chrome);
        assert_eq!(Finish::classify("Metallic Silver"), Finish::Metallic);
    }

    #[test]
    fn test_classify_first_rule_wins() {
        // both "glitter" and "trans" appear; "trans" is checked first
        assert_eq!(Finish::classify("Glitter Trans-Light Blue"), Finish::Trans);
        assert_eq!(Finish::classify("Pearl Trans"), Finish::Pearl);
    }

    #[test]
    fn test_finish_set() {
        let set = FinishSet::only(Finish::Solid).with(Finish::Trans);
        assert!(set.contains(Finish::Solid));
        assert!(set.contains(Finish::Trans));
        assert!(!set.contains(Finish::Chrome));
        assert_eq!(set.to_string(), "solid, trans");
        assert_eq!(FinishSet::all().iter().count(), 6);
        assert_eq!(FinishSet::empty().to_string(), "none");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Metallic".parse::<Finish>().unwrap(), Finish::Metallic);
        assert!("matte".parse::<Finish>().is_err());
    }
}
