//! Catalog colours.

use serde::Serialize;

use crate::error::Result;
use crate::space::{rgb_to_lab, LabColour};

use super::{Colour, Finish};

/// A colour offered by the catalog for some piece type.
///
/// Lab coordinates are derived from `rgb` in the constructor and there is no
/// way to set them independently. Instances are shared as `Arc<BrickColour>`
/// and never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct BrickColour {
    id: String,
    name: String,
    rgb: Colour,
    #[serde(skip)]
    lab: LabColour,
    availability: Option<u32>,
    finish: Finish,
}

impl BrickColour {
    /// Create a catalog colour. The finish is classified from `name`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rgb: Colour,
        availability: Option<u32>,
    ) -> Self {
        let name = name.into();
        let finish = Finish::classify(&name);
        Self {
            id: id.into(),
            name,
            rgb,
            lab: rgb_to_lab(rgb),
            availability,
            finish,
        }
    }

    /// Create a catalog colour from a hex code.
    pub fn from_hex(
        id: impl Into<String>,
        name: impl Into<String>,
        hex: &str,
        availability: Option<u32>,
    ) -> Result<Self> {
        Ok(Self::new(id, name, Colour::from_hex(hex)?, availability))
    }

    /// Stable catalog identity, used for aggregation.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rgb(&self) -> Colour {
        self.rgb
    }

    pub fn lab(&self) -> LabColour {
        self.lab
    }

    pub fn availability(&self) -> Option<u32> {
        self.availability
    }

    /// Availability with unknown stock treated as none.
    pub fn stock(&self) -> u32 {
        self.availability.unwrap_or(0)
    }

    pub fn finish(&self) -> Finish {
        self.finish
    }
}

impl PartialEq for BrickColour {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BrickColour {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_lab_and_finish() {
        let c = BrickColour::new("12", "Trans-Clear", Colour::rgb(0xEE, 0xEE, 0xEE), Some(5));
        assert_eq!(c.finish(), Finish::Trans);
        assert_eq!(c.lab(), rgb_to_lab(Colour::rgb(0xEE, 0xEE, 0xEE)));
        assert_eq!(c.stock(), 5);
    }

    #[test]
    fn test_unknown_availability_counts_as_zero() {
        let c = BrickColour::new("1", "White", Colour::WHITE, None);
        assert_eq!(c.availability(), None);
        assert_eq!(c.stock(), 0);
    }

    #[test]
    fn test_from_hex_rejects_bad_code() {
        assert!(BrickColour::from_hex("1", "White", "#FFF", None).is_err());
    }

    #[test]
    fn test_identity_is_the_catalog_id() {
        let a = BrickColour::new("5", "Red", Colour::rgb(0xB3, 0, 6), Some(1));
        let b = BrickColour::new("5", "Red (old swatch)", Colour::rgb(0xC9, 0x1A, 9), Some(9));
        assert_eq!(a, b);
    }
}
