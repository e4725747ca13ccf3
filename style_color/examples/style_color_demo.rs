// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parses hex colors from the command line and prints what a style sheet would store.
//!
//! ```text
//! RUST_LOG=debug cargo run --example style_color_demo -- "#ff8000" "#12345" --tint 0.5
//! ```

use clap::Parser;
use strum::IntoEnumIterator;
use style_color::{Color, NamedColor, RgbaValue};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct CliArgs {
    /// Hex colors to parse, `#rrggbb` or `#aarrggbb`.
    hex_colors: Vec<String>,
    /// Tint to attach to every parsed color.
    #[arg(long = "tint", short = 't')]
    tint: Option<f64>,
    /// Also list the named colors.
    #[arg(long = "named", short = 'n')]
    named: bool,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli_args = CliArgs::parse();
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start demo...", cli_args = ?cli_args);

    for input in &cli_args.hex_colors {
        match RgbaValue::try_from_hex_color(input) {
            Ok(value) => {
                let mut color = Color::from(value);
                if let Some(tint) = cli_args.tint {
                    color.set_tint(tint);
                }
                println!(
                    "{input:>12} -> {color:?} argb={} hash={:016x}",
                    value.to_argb_string(),
                    color.hash_value()
                );
            }
            Err(error) => {
                println!("{:?}", miette::Report::new(error));
            }
        }
    }

    if cli_args.named {
        for named_color in NamedColor::iter() {
            let color = named_color.color();
            println!("{named_color:>12} -> {color:?}");
        }
    }

    Ok(())
}
