//! Nearest catalog colour under a filter policy.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::trace;

use crate::catalog::PaletteProvider;
use crate::error::{BrickError, Result};
use crate::space::{perceptual_distance, rgb_to_lab, LabColour, LabKey};
use crate::types::{BrickColour, Colour, Finish, FinishSet, PieceType};

/// Default Lab rounding step for the match cache.
pub const DEFAULT_QUANTIZATION: f32 = 0.5;

/// Smallest non-zero step; finer steps overflow the integer cache keys.
pub const MIN_QUANTIZATION: f32 = 0.01;

/// Which catalog colours may be used.
///
/// A colour is eligible when its finish is in `finishes` and its availability
/// is strictly greater than `min_availability`. Unknown availability counts
/// as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchPolicy {
    pub min_availability: u32,
    pub finishes: FinishSet,
}

impl MatchPolicy {
    pub fn new(min_availability: u32, finishes: FinishSet) -> Self {
        Self {
            min_availability,
            finishes,
        }
    }

    /// Solid colours with more than ten in stock.
    pub fn production() -> Self {
        Self::new(10, FinishSet::only(Finish::Solid))
    }

    /// Every finish, anything with stock.
    pub fn unrestricted() -> Self {
        Self::new(0, FinishSet::all())
    }

    pub fn with_min_availability(mut self, min_availability: u32) -> Self {
        self.min_availability = min_availability;
        self
    }

    pub fn with_finishes(mut self, finishes: FinishSet) -> Self {
        self.finishes = finishes;
        self
    }

    pub fn admits(&self, colour: &BrickColour) -> bool {
        self.finishes.contains(colour.finish()) && colour.stock() > self.min_availability
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new(0, FinishSet::only(Finish::Solid))
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stock > {}, finishes: {}", self.min_availability, self.finishes)
    }
}

/// Match cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStats {
    pub hits: usize,
    pub misses: usize,
}

type MatchCache = HashMap<PieceType, HashMap<(LabKey, MatchPolicy), Arc<BrickColour>>>;

/// Finds the closest eligible catalog colour for a target.
///
/// Results are memoised per (quantized Lab, piece type, policy). Two targets
/// within the same quantization bucket share the first answer computed for
/// the bucket.
pub struct ColourMatcher<'a> {
    provider: &'a PaletteProvider,
    quantization: f32,
    cache: RwLock<MatchCache>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<'a> ColourMatcher<'a> {
    pub fn new(provider: &'a PaletteProvider) -> Self {
        Self {
            provider,
            quantization: DEFAULT_QUANTIZATION,
            cache: RwLock::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Set the Lab rounding step of the match cache. `0.0` disables caching;
    /// other steps must be at least [`MIN_QUANTIZATION`].
    pub fn with_quantization(mut self, step: f32) -> Result<Self> {
        if !step.is_finite() || step < 0.0 || (step > 0.0 && step < MIN_QUANTIZATION) {
            return Err(BrickError::Config {
                message: format!("Invalid quantization step: {}", step),
                help: Some(format!(
                    "Use 0 to disable the match cache, or a step of at least {} such as 0.5",
                    MIN_QUANTIZATION
                )),
            });
        }
        self.quantization = step;
        Ok(self)
    }

    pub fn provider(&self) -> &'a PaletteProvider {
        self.provider
    }

    pub fn quantization(&self) -> f32 {
        self.quantization
    }

    pub fn stats(&self) -> MatchStats {
        MatchStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// The eligible colour closest to `target` under CIEDE2000.
    ///
    /// Ties go to the colour listed first in the palette.
    pub fn closest(
        &self,
        target: LabColour,
        piece_type: &PieceType,
        policy: &MatchPolicy,
    ) -> Result<Arc<BrickColour>> {
        let key = (self.quantization > 0.0)
            .then(|| (LabKey::quantize(target, self.quantization), *policy));

        if let Some(key) = &key {
            if let Some(hit) = self.cached(piece_type, key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Ok(hit);
            }
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let palette = self.provider.colors_for(piece_type)?;
        let best = nearest(target, palette.iter().filter(|c| policy.admits(c)))
            .cloned()
            .ok_or_else(|| BrickError::NoEligibleColor {
                piece_type: piece_type.to_string(),
                target: format_lab(target),
                min_availability: policy.min_availability,
                finishes: policy.finishes.to_string(),
            })?;

        trace!(piece = %piece_type, colour = best.name(), "match cache miss");

        if let Some(key) = key {
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            cache
                .entry(piece_type.clone())
                .or_default()
                .entry(key)
                .or_insert_with(|| best.clone());
        }

        Ok(best)
    }

    /// Convenience wrapper taking an sRGB colour.
    pub fn closest_rgb(
        &self,
        colour: Colour,
        piece_type: &PieceType,
        policy: &MatchPolicy,
    ) -> Result<Arc<BrickColour>> {
        self.closest(rgb_to_lab(colour), piece_type, policy)
    }

    fn cached(&self, piece_type: &PieceType, key: &(LabKey, MatchPolicy)) -> Option<Arc<BrickColour>> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.get(piece_type).and_then(|m| m.get(key)).cloned()
    }
}

/// First candidate with the smallest distance to `target`.
fn nearest<'c>(
    target: LabColour,
    candidates: impl Iterator<Item = &'c Arc<BrickColour>>,
) -> Option<&'c Arc<BrickColour>> {
    let mut best: Option<(&Arc<BrickColour>, f32)> = None;
    for candidate in candidates {
        let dist = perceptual_distance(target, candidate.lab());
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((candidate, dist)),
        }
    }
    best.map(|(colour, _)| colour)
}

fn format_lab(lab: LabColour) -> String {
    format!("Lab({:.1}, {:.1}, {:.1})", lab.l, lab.a, lab.b)
}
