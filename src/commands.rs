use std::io::Write;

use crate::cli::{Command, InterpolateArgs, OutputArgs, ShowArgs};
use crate::config::{ScaleConfig, ScaleOverrides};
use crate::error::AppResult;
use crate::export::{self, Format, DEFAULT_PRECISION};
use crate::preset::presets;
use crate::responsive::interpolate_scale;
use crate::scale::{ScaleRatio, TypographicScale};

pub fn execute(command: &Command, config: &ScaleConfig, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Command::Show(args) => show(args, config, out),
        Command::Ratios => ratios(out),
        Command::Presets => list_presets(out),
        Command::Interpolate(args) => interpolate(args, config, out),
    }
}

fn output_settings(args: &OutputArgs, config: &ScaleConfig) -> (Format, u32) {
    let format = args.format.or(config.format).unwrap_or_default();
    let precision = args
        .precision
        .or(config.precision)
        .unwrap_or(DEFAULT_PRECISION);
    (format, precision)
}

fn show(args: &ShowArgs, config: &ScaleConfig, out: &mut dyn Write) -> AppResult<()> {
    let overrides = ScaleOverrides {
        base: args.base,
        ratio: args.ratio,
        preset: args.preset,
    };
    let (base, ratio) = config.resolve(&overrides)?;
    let scale = if args.strict {
        TypographicScale::try_new(base, ratio)?
    } else {
        TypographicScale::new(base, ratio)
    };
    if !args.strict && !scale.sizes().iter().all(|size| size.is_finite()) {
        tracing::warn!(base, ratio, "scale contains non-finite sizes");
    }

    let (format, precision) = output_settings(&args.output, config);
    out.write_all(export::render(&scale, format, precision)?.as_bytes())?;
    Ok(())
}

fn ratios(out: &mut dyn Write) -> AppResult<()> {
    for ratio in ScaleRatio::ALL {
        writeln!(out, "{:<12}{}", ratio.name(), ratio.value())?;
    }
    Ok(())
}

fn list_presets(out: &mut dyn Write) -> AppResult<()> {
    for preset in presets() {
        writeln!(
            out,
            "{:<16}base {:<4} ratio {}",
            preset.name(),
            preset.base,
            preset.ratio.value()
        )?;
    }
    Ok(())
}

fn interpolate(args: &InterpolateArgs, config: &ScaleConfig, out: &mut dyn Write) -> AppResult<()> {
    let scale = interpolate_scale(
        args.width,
        &args.small.scale(),
        &args.large.scale(),
        args.min_width,
        args.max_width,
    );
    let (format, precision) = output_settings(&args.output, config);
    out.write_all(export::render(&scale, format, precision)?.as_bytes())?;
    Ok(())
}
