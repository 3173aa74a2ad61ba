//! docglow - highlight a code sample from the command line
//!
//! Reads a file (or stdin) and prints the highlighted HTML fragment, or a
//! colored terminal preview with `--ansi`.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use docglow::error::{GlowError, Result};
use docglow::render::{ansi, html};
use docglow::Config;

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    language: Option<String>,
    config: Option<PathBuf>,
    file: Option<PathBuf>,
    ansi: bool,
    wrap: bool,
    list: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Handle --help and --version before anything else
    if let Some(first) = args.first() {
        match first.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("docglow {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            _ => {}
        }
    }

    let opts = parse_args(&args)?;
    let config = Config::load(opts.config.as_deref())?;
    let highlighter = config.highlighter()?;

    if opts.list {
        let catalog = highlighter.catalog();
        for name in catalog.list_languages() {
            let aliases = catalog.aliases_of(name);
            if aliases.is_empty() {
                println!("{name}");
            } else {
                println!("{name} ({})", aliases.join(", "));
            }
        }
        return Ok(());
    }

    let language = match (&opts.language, &opts.file) {
        (Some(lang), _) => highlighter.catalog().resolve(lang),
        (None, Some(path)) => highlighter
            .catalog()
            .detect_language(path)
            .map(str::to_string)
            .ok_or_else(|| {
                GlowError::Message(format!("cannot detect language of {}, use --lang", path.display()))
            })?,
        (None, None) => return Err(GlowError::Message("--lang is required when reading stdin".to_string())),
    };

    if !highlighter.catalog().supports(&language) {
        eprintln!("docglow: no rules for '{language}', output is unhighlighted");
    }

    let text = match &opts.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut stdout = io::stdout().lock();
    if opts.ansi {
        ansi::write_ansi(&mut stdout, &highlighter.tokenize(&text, &language))?;
    } else {
        let fragment = highlighter.highlight(&text, &language);
        if opts.wrap {
            writeln!(stdout, "{}", html::wrap_block(&fragment, &language))?;
        } else {
            write!(stdout, "{}", fragment)?;
        }
    }
    stdout.flush()?;

    Ok(())
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-l" | "--lang" => {
                let value = iter
                    .next()
                    .ok_or_else(|| GlowError::Message(format!("{arg} needs a value")))?;
                opts.language = Some(value.clone());
            }
            "-c" | "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| GlowError::Message(format!("{arg} needs a value")))?;
                opts.config = Some(PathBuf::from(value));
            }
            "--ansi" => opts.ansi = true,
            "--wrap" => opts.wrap = true,
            "--list" => opts.list = true,
            "-" => opts.file = None,
            other if other.starts_with('-') => {
                return Err(GlowError::Message(format!("unknown option: {other}")));
            }
            other => {
                if opts.file.is_some() {
                    return Err(GlowError::Message("only one input file is supported".to_string()));
                }
                opts.file = Some(PathBuf::from(other));
            }
        }
    }

    Ok(opts)
}

fn print_usage() {
    println!("docglow {} - highlight code samples as HTML", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: docglow [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and writes the highlighted fragment to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --lang <LANG>    Language id or alias (detected from FILE otherwise)");
    println!("  -c, --config <PATH>  Config file (default: ~/.docglow.toml)");
    println!("      --ansi           Colored terminal preview instead of HTML");
    println!("      --wrap           Wrap the fragment in <pre><code class=\"language-LANG\">");
    println!("      --list           List supported languages and aliases");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
}
