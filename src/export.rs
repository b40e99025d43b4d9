use std::fmt::Write as _;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::scale::{round_to, RoundedScale, TypographicScale};

pub const DEFAULT_PRECISION: u32 = 1;
/// Digits beyond this are noise for an `f64` font size.
pub const MAX_PRECISION: u32 = 15;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize scale as JSON")]
    Json(#[from] serde_json::Error),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
    Css,
}

impl FromStr for Format {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "css" => Ok(Format::Css),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders `scale`; `precision` is capped at [`MAX_PRECISION`].
pub fn render(scale: &TypographicScale, format: Format, precision: u32) -> ExportResult<String> {
    let precision = precision.min(MAX_PRECISION);
    match format {
        Format::Text => Ok(render_text(scale, precision)),
        Format::Json => render_json(scale, precision),
        Format::Css => Ok(render_css(scale, precision)),
    }
}

fn render_text(scale: &TypographicScale, precision: u32) -> String {
    let width = scale
        .iter()
        .map(|(tier, _)| tier.name().len())
        .max()
        .unwrap_or_default();
    let precision = precision as usize;

    let mut out = format!("base {} ratio {}\n", scale.base(), scale.ratio());
    for (tier, size) in scale.iter() {
        let _ = writeln!(
            out,
            "{name:<width$}  {size:.precision$}",
            name = tier.name(),
        );
    }
    out
}

fn render_json(scale: &TypographicScale, precision: u32) -> ExportResult<String> {
    let mut json = serde_json::to_string_pretty(&RoundedScale::new(scale, precision))?;
    json.push('\n');
    Ok(json)
}

fn render_css(scale: &TypographicScale, precision: u32) -> String {
    let mut css = String::from(":root {\n");
    for (tier, size) in scale.iter() {
        let _ = writeln!(
            css,
            "  --font-size-{}: {}px;",
            tier.name().replace('_', "-"),
            round_to(size, precision),
        );
    }
    css.push_str("}\n");
    css
}
