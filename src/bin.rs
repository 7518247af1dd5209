use std::io;
use std::io::Read;

use anyhow::{Context, Result};
use clap::{App, Arg};
use serde_json;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use vecop;

fn configure_args<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.version(env!("CARGO_PKG_VERSION"))
        .author("Matthew Planchard <msplanchard@gmail.com>")
        .about(
            "Apply an arithmetic operation element-wise to two numeric sequences.\n\
            \n\
            When <y> is -, read it from stdin.\n\
            \n\
            The shorter sequence is recycled to the length of the longer one.\n\
            The result is written to stdout as JSON.",
        )
        .arg(
            Arg::with_name("x")
                .help("A JSON number or array of numbers")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("y")
                .help("A JSON number or array of numbers. May be provided as stdin.")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("type")
                .help("Operation: add, minus, multiply or divide (default: add)")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Fail instead of warning when lengths are not multiples of each other"),
        )
        .after_help(
            r#"EXAMPLES:
    vecop '[1, 2, 3, 4]' 10 add
    vecop '[2, 5]' '[3, 6]' '["divide"]'
    echo '[1, 2]' | vecop '[1, 2, 3]' - minus

Warnings are logged to stderr; set RUST_LOG to change verbosity."#,
        )
}

/// Accept either a JSON token or a bare operation name
fn parse_token(raw: Option<&str>) -> Value {
    match raw {
        None => Value::Null,
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.into())),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let app = configure_args(App::new("vecop"));
    let matches = app.get_matches();

    let x_arg = matches.value_of("x").expect("x arg expected");
    let x: Value = serde_json::from_str(x_arg).context("Could not parse x as JSON")?;

    let y_arg = matches.value_of("y").expect("y arg expected");
    let mut y_raw: String;
    if y_arg != "-" {
        y_raw = y_arg.to_string();
    } else {
        y_raw = String::new();
        io::stdin().lock().read_to_string(&mut y_raw)?;
    }
    let y: Value = serde_json::from_str(&y_raw).context("Could not parse y as JSON")?;

    let token = parse_token(matches.value_of("type"));

    let options = if matches.is_present("strict") {
        vecop::Options::strict()
    } else {
        vecop::Options::default()
    };

    let result =
        vecop::apply_with(&x, &y, &token, &options).context("Could not evaluate operation")?;

    println!("{}", result.to_string());

    Ok(())
}
