//! Geometric typographic scale: ten font-size tiers where each tier is the
//! previous one multiplied by a fixed ratio.

pub mod error;
pub mod ratio;
pub mod tier;

pub use error::{ScaleError, ScaleResult};
pub use ratio::{RatioSetting, ScaleRatio};
pub use tier::{Tier, TIER_COUNT};

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

pub const DEFAULT_BASE: f64 = 14.0;

/// One materialized font hierarchy.
///
/// Tiers are produced by sequential multiplication (`body = body_small * ratio`,
/// `body_large = body * ratio`, ...), never by `powi`, so `size(t + 1) == size(t) * ratio`
/// holds bit-for-bit for every adjacent pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypographicScale {
    base: f64,
    ratio: f64,
    sizes: [f64; TIER_COUNT],
}

impl TypographicScale {
    /// Builds a scale without checking its inputs. Degenerate values flow
    /// through the arithmetic unchanged (zero, negative, NaN, infinity).
    pub fn new(base: f64, ratio: f64) -> Self {
        let mut sizes = [base; TIER_COUNT];
        for index in 1..TIER_COUNT {
            sizes[index] = sizes[index - 1] * ratio;
        }
        Self { base, ratio, sizes }
    }

    /// Like [`TypographicScale::new`] but rejects inputs that cannot produce a
    /// strictly increasing, finite hierarchy.
    pub fn try_new(base: f64, ratio: f64) -> ScaleResult<Self> {
        let rejection = if !base.is_finite() || !ratio.is_finite() {
            Some(ScaleError::NonFiniteInput { base, ratio })
        } else if base <= 0.0 {
            Some(ScaleError::NonPositiveBase(base))
        } else if ratio <= 1.0 {
            Some(ScaleError::RatioNotAboveOne(ratio))
        } else {
            None
        };

        if let Some(error) = rejection {
            tracing::debug!(base, ratio, %error, "rejected scale inputs");
            return Err(error);
        }
        Ok(Self::new(base, ratio))
    }

    pub fn from_ratio(base: f64, ratio: ScaleRatio) -> Self {
        Self::new(base, ratio.value())
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn size(&self, tier: Tier) -> f64 {
        self.sizes[tier.index()]
    }

    /// All tier sizes, smallest first.
    pub fn sizes(&self) -> [f64; TIER_COUNT] {
        self.sizes
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, f64)> + '_ {
        Tier::ALL.into_iter().zip(self.sizes.iter().copied())
    }

    /// Tier sizes rounded half away from zero to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> [f64; TIER_COUNT] {
        self.sizes.map(|size| round_to(size, decimals))
    }

    pub fn body_small(&self) -> f64 {
        self.size(Tier::BodySmall)
    }

    pub fn body(&self) -> f64 {
        self.size(Tier::Body)
    }

    pub fn body_large(&self) -> f64 {
        self.size(Tier::BodyLarge)
    }

    pub fn paragraph_title(&self) -> f64 {
        self.size(Tier::ParagraphTitle)
    }

    pub fn subheader(&self) -> f64 {
        self.size(Tier::Subheader)
    }

    pub fn header(&self) -> f64 {
        self.size(Tier::Header)
    }

    pub fn h3(&self) -> f64 {
        self.size(Tier::H3)
    }

    pub fn h2(&self) -> f64 {
        self.size(Tier::H2)
    }

    pub fn h1(&self) -> f64 {
        self.size(Tier::H1)
    }

    pub fn display(&self) -> f64 {
        self.size(Tier::Display)
    }
}

impl Default for TypographicScale {
    fn default() -> Self {
        Self::from_ratio(DEFAULT_BASE, ScaleRatio::default())
    }
}

/// Rounds to `decimals` places. Values whose scaled form leaves the finite
/// range are returned unchanged.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

struct TierSizes<'a>(&'a [f64; TIER_COUNT]);

impl Serialize for TierSizes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TIER_COUNT))?;
        for (tier, size) in Tier::ALL.iter().zip(self.0.iter()) {
            map.serialize_entry(tier.name(), size)?;
        }
        map.end()
    }
}

fn serialize_scale<S: Serializer>(
    serializer: S,
    base: f64,
    ratio: f64,
    sizes: &[f64; TIER_COUNT],
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("TypographicScale", 3)?;
    state.serialize_field("base", &base)?;
    state.serialize_field("ratio", &ratio)?;
    state.serialize_field("sizes", &TierSizes(sizes))?;
    state.end()
}

impl Serialize for TypographicScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_scale(serializer, self.base, self.ratio, &self.sizes)
    }
}

/// Serializes a scale with every size rounded for presentation.
pub(crate) struct RoundedScale {
    base: f64,
    ratio: f64,
    sizes: [f64; TIER_COUNT],
}

impl RoundedScale {
    pub(crate) fn new(scale: &TypographicScale, decimals: u32) -> Self {
        Self {
            base: scale.base,
            ratio: scale.ratio,
            sizes: scale.rounded(decimals),
        }
    }
}

impl Serialize for RoundedScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_scale(serializer, self.base, self.ratio, &self.sizes)
    }
}
