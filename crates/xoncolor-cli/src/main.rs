use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::{fs, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xoncolor::{tokenize, Color, PlainRenderer, RenderConfig, RichRenderer};

use crate::console::{render_lines_to_ansi, render_to_ansi};
mod console;

#[derive(Parser)]
#[command(name = "xoncolor", about = "Render or strip Xonotic color codes")]
struct Cli {
    /// TOML file with `default_color`, `min_brightness` and `max_brightness`
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Text color before the first color code, e.g. `#c0c0c0`
    #[arg(long, global = true)]
    default_color: Option<Color>,
    #[arg(long, global = true)]
    min_brightness: Option<u8>,
    #[arg(long, global = true)]
    max_brightness: Option<u8>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render colored text to the terminal (reads stdin without TEXT)
    Render {
        text: Option<String>,
        /// Do not end the output with a line break
        #[arg(long)]
        fragment: bool,
    },
    /// Print text with all color codes removed
    Strip { text: Option<String> },
    /// Print the token stream of the text
    Tokens { text: Option<String> },
}

fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str::<RenderConfig>(&content)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => RenderConfig::console(),
    };
    if let Some(color) = cli.default_color {
        config = config.with_default_color(color);
    }
    let min = cli.min_brightness.unwrap_or(config.min_brightness());
    let max = cli.max_brightness.unwrap_or(config.max_brightness());
    Ok(config.with_brightness(min, max)?)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    Ok(input)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(?config, "using render config");
    match cli.command {
        Cmd::Render { text, fragment } => {
            let renderer = RichRenderer::new(config);
            let ansi = match text {
                Some(text) => render_to_ansi(&renderer, &text, fragment)?,
                None => render_lines_to_ansi(&renderer, read_stdin()?.lines(), fragment)?,
            };
            print!("{ansi}");
        }
        Cmd::Strip { text } => {
            let renderer = PlainRenderer::new(config);
            let plain = match text {
                Some(text) => renderer.convert(&text),
                None => renderer.convert_lines(read_stdin()?.lines()),
            };
            println!("{plain}");
        }
        Cmd::Tokens { text } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            for token in tokenize(&text) {
                println!("{token:?}");
            }
        }
    }
    Ok(())
}
