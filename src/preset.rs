use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::scale::{ScaleError, ScaleRatio, TypographicScale, DEFAULT_BASE};

pub const PRESET_BASES: [u16; 5] = [10, 12, 14, 16, 18];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresetError {
    #[error("preset name must look like <ratio>-<base>, got {0:?}")]
    Malformed(String),
    #[error("unknown ratio in preset {name:?}")]
    UnknownRatio { name: String, source: ScaleError },
    #[error("invalid base in preset {name:?}: {base:?}")]
    InvalidBase { name: String, base: String },
}

pub type PresetResult<T> = std::result::Result<T, PresetError>;

/// A named `(base, ratio)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePreset {
    pub ratio: ScaleRatio,
    pub base: f64,
}

pub const DEFAULT_PRESET: ScalePreset = ScalePreset::new(ScaleRatio::Large, DEFAULT_BASE);

impl ScalePreset {
    pub const fn new(ratio: ScaleRatio, base: f64) -> Self {
        Self { ratio, base }
    }

    /// Parses `<ratio>-<base>`, e.g. `large-14`, `extra-large-15.5` or `small-1e1`.
    pub fn parse(name: &str) -> PresetResult<Self> {
        let (ratio, base) =
            split_preset_name(name.trim()).ok_or_else(|| PresetError::Malformed(name.to_string()))?;
        if ratio.is_empty() || base.is_empty() {
            return Err(PresetError::Malformed(name.to_string()));
        }

        let ratio = ratio
            .parse::<ScaleRatio>()
            .map_err(|source| PresetError::UnknownRatio {
                name: name.to_string(),
                source,
            })?;
        let base = base
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or_else(|| PresetError::InvalidBase {
                name: name.to_string(),
                base: base.to_string(),
            })?;

        Ok(Self::new(ratio, base))
    }

    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn scale(&self) -> TypographicScale {
        TypographicScale::from_ratio(self.base, self.ratio)
    }
}

/// Splits after a known ratio spelling so the base may itself contain `-`.
fn split_preset_name(name: &str) -> Option<(&str, &str)> {
    ScaleRatio::SPELLINGS
        .into_iter()
        .find_map(|(spelling, _)| {
            let base = name.strip_prefix(spelling)?.strip_prefix('-')?;
            Some((spelling, base))
        })
        .or_else(|| name.split_once('-'))
}

impl Default for ScalePreset {
    fn default() -> Self {
        DEFAULT_PRESET
    }
}

impl fmt::Display for ScalePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.ratio, self.base)
    }
}

impl FromStr for ScalePreset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ScalePreset> for TypographicScale {
    fn from(preset: ScalePreset) -> Self {
        preset.scale()
    }
}

/// The built-in preset table: every named ratio at every base in [`PRESET_BASES`].
pub fn presets() -> impl Iterator<Item = ScalePreset> {
    ScaleRatio::ALL.into_iter().flat_map(|ratio| {
        PRESET_BASES
            .into_iter()
            .map(move |base| ScalePreset::new(ratio, f64::from(base)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_table_covers_every_ratio_and_base() {
        let all: Vec<ScalePreset> = presets().collect();
        assert_eq!(all.len(), ScaleRatio::ALL.len() * PRESET_BASES.len());
        assert!(all.contains(&DEFAULT_PRESET));
        assert_eq!(all[0].name(), "small-10");
        assert_eq!(all[all.len() - 1].name(), "extra_large-18");
    }

    #[test]
    fn preset_names_parse_back_to_the_same_pair() {
        for preset in presets() {
            assert_eq!(ScalePreset::parse(&preset.name()).unwrap(), preset);
        }
    }

    #[test]
    fn preset_accepts_bases_outside_the_table() {
        let preset = ScalePreset::parse("extra-large-15.5").unwrap();
        assert_eq!(preset.ratio, ScaleRatio::ExtraLarge);
        assert_eq!(preset.base, 15.5);
    }

    #[test]
    fn preset_accepts_exponent_bases() {
        let preset = ScalePreset::parse("large-1e-3").unwrap();
        assert_eq!(preset.ratio, ScaleRatio::Large);
        assert_eq!(preset.base, 0.001);

        let preset = ScalePreset::parse("extra-large-2.5e1").unwrap();
        assert_eq!(preset.ratio, ScaleRatio::ExtraLarge);
        assert_eq!(preset.base, 25.0);

        assert!(matches!(
            ScalePreset::parse("large-1e-"),
            Err(PresetError::InvalidBase { base, .. }) if base == "1e-"
        ));
    }

    #[test]
    fn preset_scale_matches_direct_construction() {
        let preset: ScalePreset = "small-12".parse().unwrap();
        assert_eq!(
            TypographicScale::from(preset),
            TypographicScale::new(12.0, ScaleRatio::Small.value())
        );
        assert_eq!(ScalePreset::default().scale(), TypographicScale::default());
    }

    #[test]
    fn preset_rejects_malformed_names() {
        assert_eq!(
            ScalePreset::parse("large"),
            Err(PresetError::Malformed("large".to_string()))
        );
        assert!(matches!(
            ScalePreset::parse("huge-14"),
            Err(PresetError::UnknownRatio { .. })
        ));
        assert!(matches!(
            ScalePreset::parse("large-abc"),
            Err(PresetError::InvalidBase { base, .. }) if base == "abc"
        ));
        assert!(matches!(
            ScalePreset::parse("large-0"),
            Err(PresetError::InvalidBase { .. })
        ));
        assert!(matches!(
            ScalePreset::parse("-14"),
            Err(PresetError::Malformed(_))
        ));
    }
}
