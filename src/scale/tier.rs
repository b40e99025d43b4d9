use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::ScaleError;

pub const TIER_COUNT: usize = 10;

/// Named font-size levels, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    BodySmall,
    Body,
    BodyLarge,
    ParagraphTitle,
    Subheader,
    Header,
    H3,
    H2,
    H1,
    Display,
}

impl Tier {
    pub const ALL: [Tier; TIER_COUNT] = [
        Tier::BodySmall,
        Tier::Body,
        Tier::BodyLarge,
        Tier::ParagraphTitle,
        Tier::Subheader,
        Tier::Header,
        Tier::H3,
        Tier::H2,
        Tier::H1,
        Tier::Display,
    ];

    /// Position in the hierarchy; `BodySmall` is 0.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tier::BodySmall => "body_small",
            Tier::Body => "body",
            Tier::BodyLarge => "body_large",
            Tier::ParagraphTitle => "paragraph_title",
            Tier::Subheader => "subheader",
            Tier::Header => "header",
            Tier::H3 => "h3",
            Tier::H2 => "h2",
            Tier::H1 => "h1",
            Tier::Display => "display",
        }
    }

    pub fn next(self) -> Option<Tier> {
        Tier::ALL.get(self.index() + 1).copied()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // camelCase and kebab-case spellings fold onto the snake_case names
        let normalized: String = s
            .trim()
            .chars()
            .flat_map(|c| {
                let lead = (c.is_ascii_uppercase()).then_some('_');
                lead.into_iter().chain(std::iter::once(c.to_ascii_lowercase()))
            })
            .map(|c| if c == '-' { '_' } else { c })
            .collect();
        let normalized = normalized.trim_start_matches('_');

        Tier::ALL
            .into_iter()
            .find(|tier| tier.name() == normalized)
            .ok_or_else(|| ScaleError::UnknownTier(s.to_string()))
    }
}
