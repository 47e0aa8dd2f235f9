//! keypad-calc - press calculator keys from the terminal

use anyhow::{Context, Result};
use clap::Parser;
use keypad_calc::display::Formatter;
use keypad_calc::keypad::LAYOUT;
use keypad_calc::{Calculator, FormatConfig, KeyError};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(about = "Press calculator keys and print the display", long_about = None)]
struct Cli {
    /// Keys to press, e.g. `5 + 3 =` (reads key lines from stdin if not provided)
    keys: Vec<String>,

    /// Path to a TOML file with display formatting options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the calculator state as JSON instead of the display
    #[arg(long)]
    json: bool,

    /// Print the transition log when done
    #[arg(long)]
    history: bool,

    /// Print the keypad layout and exit
    #[arg(long)]
    keypad: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("keypad_calc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        let code = if e.downcast_ref::<KeyError>().is_some() {
            2
        } else {
            1
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.keypad {
        print_keypad();
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => FormatConfig::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FormatConfig::default(),
    };
    let mut calc = Calculator::with_formatter(Formatter::new(config));
    if !cli.history {
        calc = calc.without_history();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.keys.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading keys from stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            for key in line.split_whitespace() {
                if let Err(e) = calc.dispatch_key(key) {
                    eprintln!("Error: {e}");
                    break;
                }
            }
            render(&mut out, &calc, cli.json)?;
        }
    } else {
        for key in &cli.keys {
            calc.dispatch_key(key)?;
        }
        render(&mut out, &calc, cli.json)?;
    }

    if cli.history {
        print_history(&mut out, &calc, cli.json)?;
    }

    Ok(())
}

fn render(out: &mut impl Write, calc: &Calculator, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(calc.state())?)?;
    } else {
        writeln!(out, "{}", calc.display())?;
    }
    Ok(())
}

fn print_history(out: &mut impl Write, calc: &Calculator, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(calc.history())?)?;
        return Ok(());
    }

    for record in calc.history().transitions() {
        let marker = if record.changed() { ' ' } else { '~' };
        writeln!(
            out,
            "{} {marker}{:>4}  {} -> {}",
            record.timestamp.format("%H:%M:%S%.3f"),
            record.action.to_string(),
            record.from.phase().name(),
            record.to.phase().name(),
        )?;
    }
    if let Some(elapsed) = calc.history().duration() {
        writeln!(
            out,
            "{} keys, {} changed, {:.3}s elapsed",
            calc.history().len(),
            calc.history().changed_count(),
            elapsed.as_secs_f64(),
        )?;
    }
    Ok(())
}

fn print_keypad() {
    for row in LAYOUT {
        let cells: Vec<String> = row.iter().map(|label| format!("[{label:^5}]")).collect();
        println!("{}", cells.join(" "));
    }
}
