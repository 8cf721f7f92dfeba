use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ramp_engine::logging::{init_logging, LoggingConfig};
use ramp_engine::paint::InterpolationMode;
use ramp_formats::Format;
use ramp_ui::{EditorConfig, EditorSession};

#[derive(Debug, Parser)]
#[command(bin_name = "ramp-studio", version, about = "Inspect, sample and convert color gradients")]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log filter in env_logger syntax, e.g. `debug` or `ramp_formats=trace`.
    #[arg(global = true, long, value_name = "FILTER")]
    log: Option<String>,

    /// linear, ease-in, ease-out or ease-in-out.
    #[arg(global = true, long, default_value_t = InterpolationMode::Linear)]
    mode: InterpolationMode,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stops and the CSS line.
    Show {
        /// `.json` or `.gradient` file; the default stops when omitted.
        input: Option<PathBuf>,
    },
    /// Print the color at one position.
    Sample {
        input: Option<PathBuf>,
        #[arg(long, value_name = "T")]
        at: f64,
    },
    /// Write the gradient in another format.
    Export {
        input: Option<PathBuf>,
        /// json, jwf, full, css or png.
        #[arg(long)]
        format: Format,
        #[arg(long, short)]
        output: PathBuf,
        /// PNG width in pixels.
        #[arg(long, default_value_t = 1200)]
        width: u32,
        /// PNG height in pixels.
        #[arg(long, default_value_t = 200)]
        height: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.filter(filter.as_str());
    }
    init_logging(logging);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = EditorConfig::default().mode(cli.mode);

    match cli.command {
        Command::Show { input } => {
            let session = open(config, input.as_deref())?;
            for (i, stop) in session.stops().stops().iter().enumerate() {
                println!("{i:>3}  {:.6}  {}", stop.position, stop.color);
            }
            println!("{}", session.css());
        }
        Command::Sample { input, at } => {
            let session = open(config, input.as_deref())?;
            let c = session.sample(at);
            println!("{c}  rgb({}, {}, {})", c.r, c.g, c.b);
        }
        Command::Export { input, format, output, width, height } => {
            let session = open(config.png_size(width, height), input.as_deref())?;
            session
                .save(&output, format)
                .with_context(|| format!("failed to export {format} to {}", output.display()))?;
            log::info!("wrote {}", output.display());
        }
    }
    Ok(())
}

fn open(config: EditorConfig, input: Option<&Path>) -> Result<EditorSession> {
    let mut session = EditorSession::new(config).context("invalid editor configuration")?;
    if let Some(path) = input {
        session
            .load(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
    }
    Ok(session)
}
