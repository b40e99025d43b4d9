//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::export::{Format, MAX_PRECISION};
use crate::preset::ScalePreset;
use crate::responsive::{DEFAULT_LARGEST_SCREEN_WIDTH, DEFAULT_SMALLEST_SCREEN_WIDTH};
use crate::scale::RatioSetting;

#[derive(Debug, Parser)]
#[command(
    name = "typescale",
    version,
    about = "Generate geometric typographic scales"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read settings from this file instead of $XDG_CONFIG_HOME/typescale/config.json.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the ten tiers of a scale.
    Show(ShowArgs),
    /// List the named scale ratios.
    Ratios,
    /// List the built-in presets.
    Presets,
    /// Print the scale interpolated for a screen width between two presets.
    Interpolate(InterpolateArgs),
}

#[derive(Debug, Clone, Args, Default)]
pub struct OutputArgs {
    /// Output format: text, json or css.
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<Format>,

    /// Decimal places in the output (at most 15).
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_PRECISION))
    )]
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Args, Default)]
pub struct ShowArgs {
    /// Size of the smallest tier.
    #[arg(long, value_name = "SIZE", allow_negative_numbers = true)]
    pub base: Option<f64>,

    /// Tier-to-tier ratio: small, normal, large, extra_large, or a number.
    #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
    pub ratio: Option<RatioSetting>,

    /// Named preset such as large-14.
    #[arg(long, value_name = "PRESET")]
    pub preset: Option<ScalePreset>,

    /// Reject a non-positive base, a ratio of 1 or less, and non-finite values.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Clone, Args)]
pub struct InterpolateArgs {
    /// Screen width to interpolate for.
    #[arg(long, value_name = "WIDTH")]
    pub width: f64,

    /// Preset used at the smallest screen width.
    #[arg(long, value_name = "PRESET", default_value = "small-12")]
    pub small: ScalePreset,

    /// Preset used at the largest screen width.
    #[arg(long, value_name = "PRESET", default_value = "large-16")]
    pub large: ScalePreset,

    #[arg(long, value_name = "WIDTH", default_value_t = DEFAULT_SMALLEST_SCREEN_WIDTH)]
    pub min_width: f64,

    #[arg(long, value_name = "WIDTH", default_value_t = DEFAULT_LARGEST_SCREEN_WIDTH)]
    pub max_width: f64,

    #[command(flatten)]
    pub output: OutputArgs,
}
