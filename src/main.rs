//! Science Presets CLI
//!
//! Usage:
//!   science-presets [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      List every preset with its figure size
//!   get       Show the preset for a conference, layout and figure type
//!   resolve   Resolve a preset name or alias to its canonical name
//!   stack     Print the style stack to apply, one style per line
//!   mplstyle  Print the style-sheet fragment for a preset
//!
//! Options:
//!   -c, --config <FILE>  Defaults for missing arguments (TOML format)
//!   -h, --help           Print help

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use science_presets::{
    get_preset, mplstyle, preset_by_name, presets, resolve_preset_name, style_stack, Category,
    ConfigError, PresetError, ResolverConfig,
};

#[derive(Parser)]
#[command(name = "science-presets")]
#[command(about = "Conference figure presets for scientific plot styles")]
struct Cli {
    /// Config file with default conference, layout and figure type
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every preset with its figure size
    List,

    /// Show the preset for a conference, layout and figure type
    Get {
        #[command(flatten)]
        axes: AxisArgs,

        /// Print the full preset as TOML
        #[arg(long)]
        toml: bool,
    },

    /// Resolve a preset name or alias to its canonical name
    Resolve {
        /// Preset name, e.g. nips-line-1col
        name: String,
    },

    /// Print the style stack to apply, one style per line
    Stack {
        #[command(flatten)]
        axes: AxisArgs,

        /// Append the no-latex style
        #[arg(long)]
        no_latex: bool,
    },

    /// Print the style-sheet fragment for a preset
    Mplstyle {
        /// Preset name, e.g. acl-2col-bar
        name: String,
    },
}

#[derive(Args)]
struct AxisArgs {
    /// Conference (acl, kdd, icdm, neurips)
    conference: Option<String>,

    /// Layout (1col, 2col)
    layout: Option<String>,

    /// Figure type (line, bar, scatter, heatmap, image-grid, text-equation)
    figure_type: Option<String>,
}

impl AxisArgs {
    /// Fill missing axes from the config defaults
    fn resolve(self, config: &ResolverConfig) -> Result<(String, String, String), CliError> {
        let conference = self
            .conference
            .or_else(|| config.conference.map(|c| c.to_string()))
            .ok_or(CliError::MissingArgument(Category::Conference))?;
        let layout = self
            .layout
            .or_else(|| config.layout.map(|l| l.to_string()))
            .ok_or(CliError::MissingArgument(Category::Layout))?;
        let figure_type = self
            .figure_type
            .or_else(|| config.figure_type.map(|t| t.to_string()))
            .ok_or(CliError::MissingArgument(Category::FigureType))?;
        Ok((conference, layout, figure_type))
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("failed to serialize preset: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing {0}: pass it as an argument or set it in the config file")]
    MissingArgument(Category),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e {
            CliError::Preset(err) => {
                eprint!("{}", err.report(io::stderr().is_terminal()));
            }
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            ResolverConfig::from_file(path)?
        }
        None => ResolverConfig::default(),
    };

    match cli.command {
        Command::List => {
            for spec in presets() {
                let (width, height) = spec.figsize;
                println!("{:<28} {:>5} x {:<4}", spec.name, width, height);
            }
        }
        Command::Get { axes, toml } => {
            let (conference, layout, figure_type) = axes.resolve(&config)?;
            let spec = get_preset(&conference, &layout, &figure_type)?;
            if toml {
                print!("{}", toml::to_string(spec)?);
            } else {
                let (width, height) = spec.figsize;
                println!("{} {} x {}", spec.name, width, height);
            }
        }
        Command::Resolve { name } => {
            println!("{}", resolve_preset_name(&name)?);
        }
        Command::Stack { axes, no_latex } => {
            let (conference, layout, figure_type) = axes.resolve(&config)?;
            let styles = style_stack(
                &conference,
                &layout,
                &figure_type,
                no_latex || config.no_latex,
            )?;
            for style in styles {
                println!("{}", style);
            }
        }
        Command::Mplstyle { name } => {
            let spec = preset_by_name(&name)?;
            print!("{}", mplstyle::render(spec));
        }
    }

    Ok(())
}
