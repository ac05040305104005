// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea CLI entrypoint.
//!
//! Composes a multi-panel figure from SVG files according to a bracketed
//! structure string and writes it to the output path, whose suffix selects
//! the output format (`.svg`, `.png`, or `.pdf`).

use std::error::Error;

use galatea::format::parse_structure;
use galatea::layout::{compose_panel, panel_tree, ComposeOptions};
use galatea::store::{export_figure, FileSource};

const DEFAULT_WIDTH: f64 = 1200.0;
const DEFAULT_FONTSIZE: f64 = 24.0;
const DEFAULT_MARGIN: f64 = 0.0;
const DEFAULT_LABEL_PAD: f64 = 0.0;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --figures <structure> --output <path> [--width <px>] [--fontsize <px>] [--margin <px>] [--label-pad <px>]\n\n<structure> is a comma-separated list of SVG file paths; brackets group\npanels into rows, e.g. \"a.svg,[b.svg,c.svg]\". Each panel is labelled\na, b, c, ... in reading order.\n\n<path> must end in .svg, .png, or .pdf; the suffix selects the format.\n\n--width sets the final composite width in pixels (default {DEFAULT_WIDTH}).\n--fontsize sets the panel label font size (default {DEFAULT_FONTSIZE}).\n--margin adds spacing between panels (default {DEFAULT_MARGIN}).\n--label-pad offsets labels from the panel corner (default {DEFAULT_LABEL_PAD})."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    figures: Option<String>,
    output: Option<String>,
    width: Option<f64>,
    fontsize: Option<f64>,
    margin: Option<f64>,
    label_pad: Option<f64>,
}

fn parse_length(raw: &str) -> Result<f64, ()> {
    let value: f64 = raw.parse().map_err(|_| ())?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(())
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--figures" | "-f" => {
                if options.figures.is_some() {
                    return Err(());
                }
                options.figures = Some(args.next().ok_or(())?);
            }
            "--output" | "-o" => {
                if options.output.is_some() {
                    return Err(());
                }
                options.output = Some(args.next().ok_or(())?);
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let width = parse_length(&raw)?;
                if width == 0.0 {
                    return Err(());
                }
                options.width = Some(width);
            }
            "--fontsize" => {
                if options.fontsize.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.fontsize = Some(parse_length(&raw)?);
            }
            "--margin" => {
                if options.margin.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.margin = Some(parse_length(&raw)?);
            }
            "--label-pad" => {
                if options.label_pad.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.label_pad = Some(parse_length(&raw)?);
            }
            _ => return Err(()),
        }
    }

    if options.figures.is_none() || options.output.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "galatea".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let structure = options.figures.as_deref().unwrap_or_default();
        let output = options.output.as_deref().unwrap_or_default();

        let nodes = parse_structure(structure)?;
        let tree = panel_tree(nodes);

        let compose_options = ComposeOptions {
            width: options.width.unwrap_or(DEFAULT_WIDTH),
            margin: options.margin.unwrap_or(DEFAULT_MARGIN),
            fontsize: options.fontsize.unwrap_or(DEFAULT_FONTSIZE),
            label_pad: options.label_pad.unwrap_or(DEFAULT_LABEL_PAD),
        };

        let figure = compose_panel(tree, &FileSource, &compose_options)?;
        export_figure(&figure, std::path::Path::new(output))?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("galatea: {err}");
        std::process::exit(1);
    }
}
