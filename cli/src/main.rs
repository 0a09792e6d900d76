use std::io::{self, BufRead, Write};

use clap::Parser;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use base::prelude::*;
use eval::evaluate;

/// Evaluate a postfix expression over fixed-width two's-complement
/// words and print the result in binary and decimal.
#[derive(Debug, Parser)]
#[command(about = "Evaluate postfix expressions over fixed-width two's-complement words")]
struct Args {
    /// Postfix expression, e.g. "3 4 +" (prompted for when omitted)
    expression: Option<String>,

    /// Word width in bits: 8, 16 or 32 (prompted for when omitted)
    #[arg(long)]
    width: Option<u32>,
}

fn get_colour_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn report_error(e: &dyn std::error::Error) {
    let mut stream = StandardStream::stderr(get_colour_choice());
    let mut colour = ColorSpec::new();
    colour.set_fg(Some(termcolor::Color::Red));
    if let Err(colour_error) = stream.set_color(&colour) {
        event!(
            Level::ERROR,
            "Failed to select colour {:?}: {}",
            colour,
            colour_error
        );
    }
    let _ = writeln!(stream, "{e}");
    if let Err(reset_error) = stream.reset() {
        event!(Level::ERROR, "Failed to reset terminal: {}", reset_error);
    }
}

fn prompt(text: &str) -> Result<String, io::Error> {
    let mut stdout = io::stdout();
    write!(stdout, "{text}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run_calculator() -> Result<(), Box<dyn std::error::Error>> {
    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Box::new(e));
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let args = Args::parse();

    let expression = match args.expression {
        Some(expression) => expression,
        None => prompt("Enter the postfix expression: ")?,
    };

    // Width validation happens before any evaluation starts; an
    // unsupported width is fatal here.
    let width_bits: u32 = match args.width {
        Some(bits) => bits,
        None => prompt("Enter the word width (8, 16, or 32): ")?
            .trim()
            .parse()?,
    };
    let width = Width::try_from(width_bits)?;
    event!(Level::DEBUG, "evaluating {:?} at width {}", expression, width);

    let result = evaluate(&expression, width)?;
    println!("Binary result: {result}");
    println!("Decimal result: {}", result.to_i64());
    Ok(())
}

fn main() {
    match run_calculator() {
        Err(e) => {
            report_error(e.as_ref());
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}
