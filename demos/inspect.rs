//! Pretty print JSON the way the object inspector would: styled, and fitted to the terminal.
//!
//! ```text
//! cargo run --example inspect -- --mode smart data.json
//! echo '{"a": [1, 2, 3]}' | cargo run --example inspect -- --width 10
//! ```

use cicada_pprint::combinators::{dquotes, enclose_sep, list};
use cicada_pprint::constructors::{colour, group, italicise, line, nest, text};
use cicada_pprint::{
    AnsiCodes, Colour, Discard, Doc, FormatCodes, MinecraftCodes, RenderMode, RenderOptions,
};
use clap::{Parser, ValueEnum};
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Pretty print JSON with styling", long_about = None)]
struct Args {
    /// File to read. Reads stdin if absent.
    file: Option<PathBuf>,
    /// Page width. Defaults to the terminal width.
    #[arg(short, long)]
    width: Option<usize>,
    /// Fraction of the width that the text of a line, excluding indentation, may use.
    #[arg(short, long, default_value_t = 1.0)]
    ribbon: f64,
    /// pretty, smart, or compact.
    #[arg(short, long, default_value = "pretty")]
    mode: RenderMode,
    /// How to write out styles.
    #[arg(short, long, value_enum, default_value_t = Codes::Ansi)]
    codes: Codes,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Codes {
    Ansi,
    Minecraft,
    None,
}

fn json_doc(value: &Value) -> Doc {
    match value {
        Value::Null => italicise(colour(Colour::LightPurple, text("null"))),
        Value::Bool(b) => colour(Colour::LightPurple, text(&b.to_string())),
        Value::Number(n) => colour(Colour::Gold, text(&n.to_string())),
        Value::String(s) => colour(Colour::Green, json_string(s)),
        Value::Array(elems) => list(elems.iter().map(json_doc).collect()),
        Value::Object(entries) => {
            let entries = entries
                .iter()
                .map(|(key, value)| {
                    let key = colour(Colour::Aqua, json_string(key));
                    group(key + text(":") + nest(2, line() + json_doc(value)))
                })
                .collect::<Vec<_>>();
            enclose_sep(text("{"), text("}"), text(", "), entries)
        }
    }
}

fn json_string(s: &str) -> Doc {
    let quoted = Value::String(s.to_owned()).to_string();
    dquotes(text(&quoted[1..quoted.len() - 1]))
}

fn default_width() -> usize {
    match termion::terminal_size() {
        Ok((width, _)) => width as usize,
        Err(err) => {
            log::debug!("no terminal size ({}), using 80 columns", err);
            80
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };
    let value: Value = serde_json::from_str(&source)?;

    let options = RenderOptions {
        width: args.width.unwrap_or_else(default_width),
        ribbon_frac: args.ribbon,
        mode: args.mode,
        styled: !matches!(args.codes, Codes::None),
    };
    log::info!("rendering with {:?}", options);

    let codes: &dyn FormatCodes = match args.codes {
        Codes::Ansi => &AnsiCodes,
        Codes::Minecraft => &MinecraftCodes,
        Codes::None => &Discard,
    };
    let output = options.render(&json_doc(&value)).try_display_with(codes)?;
    println!("{}", output);
    Ok(())
}
