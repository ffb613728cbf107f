//! Builtin colour table for offline use.
//!
//! The table lists the common solid colours plus the trans, pearl, metallic,
//! chrome, and glitter variants. It carries no real stock data, so every
//! entry reports the same configurable availability. Ids are the snake-case
//! colour names.

use crate::types::PieceType;

use super::{CatalogEntry, CatalogError, CatalogSource};

/// Default availability reported for every builtin colour.
pub const DEFAULT_BUILTIN_STOCK: u32 = 100;

const COLOURS: &[(&str, &str, &str)] = &[
    ("aqua", "Aqua", "BCE5DC"),
    ("black", "Black", "212121"),
    ("blue", "Blue", "0057A6"),
    ("bright_green", "Bright Green", "10CB31"),
    ("bright_light_blue", "Bright Light Blue", "BCD1ED"),
    ("bright_light_orange", "Bright Light Orange", "FFC700"),
    ("bright_light_yellow", "Bright Light Yellow", "FFF08C"),
    ("bright_pink", "Bright Pink", "F7BCDA"),
    ("brown", "Brown", "6B3F22"),
    ("coral", "Coral", "FF8172"),
    ("dark_azure", "Dark Azure", "009FE0"),
    ("dark_blue", "Dark Blue", "243757"),
    ("dark_bluish_gray", "Dark Bluish Gray", "595D60"),
    ("dark_brown", "Dark Brown", "50372F"),
    ("dark_gray", "Dark Gray", "6B5A5A"),
    ("dark_green", "Dark Green", "2E5543"),
    ("dark_nougat", "Dark Nougat", "CE7942"),
    ("dark_orange", "Dark Orange", "B35408"),
    ("dark_pink", "Dark Pink", "EF5BB3"),
    ("dark_purple", "Dark Purple", "5F2683"),
    ("dark_red", "Dark Red", "6A0E15"),
    ("dark_tan", "Dark Tan", "B89869"),
    ("dark_turquoise", "Dark Turquoise", "00A29F"),
    ("dark_yellow", "Dark Yellow", "DD982E"),
    ("green", "Green", "00923D"),
    ("lavender", "Lavender", "D3BDE3"),
    ("light_aqua", "Light Aqua", "CFEFEA"),
    ("light_bluish_gray", "Light Bluish Gray", "AFB5C7"),
    ("light_brown", "Light Brown", "99663E"),
    ("light_gray", "Light Gray", "9C9C9C"),
    ("light_green", "Light Green", "D7EED1"),
    ("light_nougat", "Light Nougat", "FECCB0"),
    ("light_orange", "Light Orange", "FFBC36"),
    ("light_salmon", "Light Salmon", "FCC7B7"),
    ("light_turquoise", "Light Turquoise", "00C5BC"),
    ("light_yellow", "Light Yellow", "FEE89F"),
    ("lime", "Lime", "C4E000"),
    ("maersk_blue", "Maersk Blue", "7DC1D8"),
    ("magenta", "Magenta", "B72276"),
    ("medium_azure", "Medium Azure", "6ACEE0"),
    ("medium_blue", "Medium Blue", "82ADD8"),
    ("medium_lavender", "Medium Lavender", "C689D9"),
    ("medium_nougat", "Medium Nougat", "E3A05B"),
    ("medium_orange", "Medium Orange", "FFA531"),
    ("medium_violet", "Medium Violet", "9391E4"),
    ("neon_yellow", "Neon Yellow", "FFFC00"),
    ("nougat", "Nougat", "FFAF7D"),
    ("olive_green", "Olive Green", "ABA953"),
    ("orange", "Orange", "FF7E14"),
    ("pink", "Pink", "F5CDD6"),
    ("purple", "Purple", "7A238D"),
    ("red", "Red", "B30006"),
    ("reddish_brown", "Reddish Brown", "82422A"),
    ("reddish_orange", "Reddish Orange", "FF5500"),
    ("rose_pink", "Rose Pink", "F2D3D1"),
    ("rust", "Rust", "B24817"),
    ("sand_blue", "Sand Blue", "8899AB"),
    ("sand_green", "Sand Green", "A2BFA3"),
    ("tan", "Tan", "EED9A4"),
    ("very_light_bluish_gray", "Very Light Bluish Gray", "E4E8E8"),
    ("very_light_gray", "Very Light Gray", "E8E8E8"),
    ("very_light_orange", "Very Light Orange", "FFDCA4"),
    ("white", "White", "FFFFFF"),
    ("yellow", "Yellow", "FFE001"),
    ("yellowish_green", "Yellowish Green", "E7F2A7"),
    ("trans_aqua", "Trans-Aqua", "B7C8BF"),
    ("trans_black", "Trans-Black", "777777"),
    ("trans_bright_green", "Trans-Bright Green", "10CB31"),
    ("trans_brown", "Trans-Brown", "939484"),
    ("trans_clear", "Trans-Clear", "EEEEEE"),
    ("trans_dark_blue", "Trans-Dark Blue", "00296B"),
    ("trans_green", "Trans-Green", "217625"),
    ("trans_light_blue", "Trans-Light Blue", "68BCC5"),
    ("trans_light_bright_green", "Trans-Light Bright Green", "71EB54"),
    ("trans_light_orange", "Trans-Light Orange", "E99A3A"),
    ("trans_medium_blue", "Trans-Medium Blue", "76A3C8"),
    ("trans_neon_green", "Trans-Neon Green", "C0F500"),
    ("trans_neon_orange", "Trans-Neon Orange", "FF4231"),
    ("trans_neon_yellow", "Trans-Neon Yellow", "FFD700"),
    ("trans_orange", "Trans-Orange", "E96F01"),
    ("trans_purple", "Trans-Purple", "5525B7"),
    ("trans_red", "Trans-Red", "9C0010"),
    ("trans_yellow", "Trans-Yellow", "EBF72D"),
    ("chrome_gold", "Chrome Gold", "F1F2E1"),
    ("flat_dark_gold", "Flat Dark Gold", "AD7118"),
    ("flat_silver", "Flat Silver", "8D949C"),
    ("pearl_gold", "Pearl Gold", "E79E1D"),
    ("pearl_light_gold", "Pearl Light Gold", "E7AE5A"),
    ("pearl_light_gray", "Pearl Light Gray", "ACB7C0"),
    ("satin_trans_light_blue", "Satin Trans-Light Blue", "68BCC5"),
    ("metallic_gold", "Metallic Gold", "B8860B"),
    ("metallic_silver", "Metallic Silver", "C0C0C0"),
    ("milky_white", "Milky White", "D4D3DD"),
    ("glitter_trans_light_blue", "Glitter Trans-Light Blue", "68BCC5"),
];

/// Catalog backed by the builtin colour table; same list for every piece type.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    stock: u32,
}

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self::with_stock(DEFAULT_BUILTIN_STOCK)
    }

    /// Report `stock` as the availability of every colour.
    pub fn with_stock(stock: u32) -> Self {
        Self { stock }
    }

    pub fn len(&self) -> usize {
        COLOURS.len()
    }

    pub fn is_empty(&self) -> bool {
        COLOURS.is_empty()
    }
}

impl Default for BuiltinCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for BuiltinCatalog {
    fn name(&self) -> &str {
        "builtin"
    }

    fn fetch_colors(&self, _piece_type: &PieceType) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(COLOURS
            .iter()
            .map(|&(id, name, hex)| CatalogEntry::new(id, name, format!("#{}", hex), Some(self.stock)))
            .collect())
    }
}
