// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Prettymatrix-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Prettymatrix and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prettymatrix CLI entrypoint.
//!
//! Reads a JSON matrix or expression document from a file (or stdin) and prints the rendered
//! block. Set `RUST_LOG=debug` to see pipeline decisions such as truncation.

use std::error::Error;
use std::io::Read as _;

use prettymatrix::format::render_json;
use prettymatrix::RenderOptions;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<input.json>] [--dimensions] [--name <label>]\n  {program} -h | --help\n\n\
         Reads stdin when no input file is given.\n\n\
         Input is either a grid, e.g. [[1, 2], [3, 4]], or an object:\n  \
         {{ \"operands\": [[[1]], [[2]]], \"operators\": [\"+\"], \"names\": [\"a\", \"b\"], \"dimensions\": true }}\n\n\
         Operators: . + - ∘ = (or dot, plus, minus, hadamard, equals).\n\
         --name labels a single grid (ignored for several operands or when \"names\" is given).\n\
         --dimensions appends the (RxC) row."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    name: Option<String>,
    dimensions: bool,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "--dimensions" => {
                if options.dimensions {
                    return Err(());
                }
                options.dimensions = true;
            }
            "--name" => {
                if options.name.is_some() {
                    return Err(());
                }
                let name = args.next().ok_or(())?;
                options.name = Some(name);
            }
            "-" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = None;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    Ok(options)
}

fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    env_logger::init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "prettymatrix".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };
        if options.help {
            print_usage(&program);
            return Ok(());
        }

        let src = read_input(options.input.as_deref())?;
        let render_options = RenderOptions { include_dimensions: options.dimensions };
        let rendered = render_json(&src, options.name.as_deref(), render_options)?;
        println!("{rendered}");
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("prettymatrix: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn parse(args: &[&str]) -> Result<CliOptions, ()> {
        parse_options(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn defaults_to_stdin_without_annotations() {
        assert_eq!(parse(&[]), Ok(CliOptions::default()));
        assert_eq!(parse(&["-"]), Ok(CliOptions::default()));
    }

    #[test]
    fn parses_path_and_flags_in_any_order() {
        let expected = CliOptions {
            input: Some("m.json".to_owned()),
            name: Some("W_x".to_owned()),
            dimensions: true,
            help: false,
        };
        assert_eq!(parse(&["--dimensions", "m.json", "--name", "W_x"]), Ok(expected.clone()));
        assert_eq!(parse(&["--name", "W_x", "m.json", "--dimensions"]), Ok(expected));
    }

    #[test]
    fn rejects_duplicates_and_unknown_flags() {
        assert_eq!(parse(&["a.json", "b.json"]), Err(()));
        assert_eq!(parse(&["--dimensions", "--dimensions"]), Err(()));
        assert_eq!(parse(&["--name"]), Err(()));
        assert_eq!(parse(&["--verbose"]), Err(()));
    }

    #[test]
    fn help_flag_is_recognised() {
        let help = CliOptions { help: true, ..CliOptions::default() };
        assert_eq!(parse(&["--help"]), Ok(help.clone()));
        assert_eq!(parse(&["-h"]), Ok(help));
        assert_eq!(parse(&["m.json", "-h"]).map(|options| options.help), Ok(true));
    }
}
