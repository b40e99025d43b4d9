use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::ScaleError;

pub const SMALL_RATIO: f64 = 1.127_842_243_8;
pub const NORMAL_RATIO: f64 = 1.173_990_212_7;
pub const LARGE_RATIO: f64 = 1.272_028_126_9;
pub const EXTRA_LARGE_RATIO: f64 = 1.618_055_555_6;

/// The canonical tier-to-tier multipliers. Any other ratio can be passed to
/// the scale constructor directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScaleRatio {
    Small,
    Normal,
    #[default]
    Large,
    #[serde(alias = "extraLarge", alias = "extra-large")]
    ExtraLarge,
}

impl ScaleRatio {
    pub const ALL: [ScaleRatio; 4] = [
        ScaleRatio::Small,
        ScaleRatio::Normal,
        ScaleRatio::Large,
        ScaleRatio::ExtraLarge,
    ];

    pub const fn value(self) -> f64 {
        match self {
            ScaleRatio::Small => SMALL_RATIO,
            ScaleRatio::Normal => NORMAL_RATIO,
            ScaleRatio::Large => LARGE_RATIO,
            ScaleRatio::ExtraLarge => EXTRA_LARGE_RATIO,
        }
    }

    /// Every accepted spelling of each named ratio.
    pub const SPELLINGS: [(&'static str, ScaleRatio); 6] = [
        ("small", ScaleRatio::Small),
        ("normal", ScaleRatio::Normal),
        ("large", ScaleRatio::Large),
        ("extra_large", ScaleRatio::ExtraLarge),
        ("extraLarge", ScaleRatio::ExtraLarge),
        ("extra-large", ScaleRatio::ExtraLarge),
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ScaleRatio::Small => "small",
            ScaleRatio::Normal => "normal",
            ScaleRatio::Large => "large",
            ScaleRatio::ExtraLarge => "extra_large",
        }
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleRatio {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ScaleRatio::SPELLINGS
            .into_iter()
            .find(|(spelling, _)| *spelling == s)
            .map(|(_, ratio)| ratio)
            .ok_or_else(|| ScaleError::UnknownRatio(s.to_string()))
    }
}

/// A ratio as written by a user: either one of the named ratios or a literal number.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RatioSetting {
    Named(ScaleRatio),
    Value(f64),
}

impl RatioSetting {
    pub const fn value(self) -> f64 {
        match self {
            RatioSetting::Named(ratio) => ratio.value(),
            RatioSetting::Value(value) => value,
        }
    }
}

impl Default for RatioSetting {
    fn default() -> Self {
        RatioSetting::Named(ScaleRatio::default())
    }
}

impl From<ScaleRatio> for RatioSetting {
    fn from(ratio: ScaleRatio) -> Self {
        RatioSetting::Named(ratio)
    }
}

impl FromStr for RatioSetting {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.trim().parse::<f64>() {
            return Ok(RatioSetting::Value(value));
        }
        s.parse::<ScaleRatio>().map(RatioSetting::Named)
    }
}
