//! Colour space conversion and perceptual distance.
//!
//! Colours are compared in CIE Lab (D65) with the CIEDE2000 difference
//! formula.

use palette::color_difference::Ciede2000;
use palette::white_point::D65;
use palette::{FromColor, Lab, Srgb};

use crate::error::Result;
use crate::types::{Colour, ColourInput};

/// CIE Lab under the D65 reference white.
pub type LabColour = Lab<D65, f32>;

/// Normalise colour-like input to 8-bit RGB.
pub fn to_rgb(input: &ColourInput) -> Result<Colour> {
    input.to_colour()
}

/// Format a colour as `#RRGGBB`.
pub fn to_hex(colour: Colour) -> String {
    colour.to_hex()
}

/// Normalise colour-like input and convert it to Lab.
pub fn to_lab(input: &ColourInput) -> Result<LabColour> {
    Ok(rgb_to_lab(to_rgb(input)?))
}

/// sRGB (gamma encoded) to Lab.
pub fn rgb_to_lab(colour: Colour) -> LabColour {
    let srgb = Srgb::new(colour.r, colour.g, colour.b).into_format::<f32>();
    LabColour::from_color(srgb)
}

/// CIEDE2000 colour difference.
pub fn perceptual_distance(a: LabColour, b: LabColour) -> f32 {
    a.difference(b)
}

/// A Lab colour rounded to a fixed step, usable as a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabKey([i32; 3]);

impl LabKey {
    /// Round each channel to the nearest multiple of `step`.
    ///
    /// Two colours sharing a key are at most `step / 2` apart per channel.
    pub fn quantize(lab: LabColour, step: f32) -> Self {
        let q = |v: f32| (v / step).round() as i32;
        Self([q(lab.l), q(lab.a), q(lab.b)])
    }
}
