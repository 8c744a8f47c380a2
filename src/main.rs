use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

use charpic::{frame_with, FrameStyle, Picture, Scene};

#[derive(Parser, Debug)]
#[command(name = "charpic", version, about = "Frame and concatenate blocks of text")]
struct Cli {
    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the built-in sample composition
    Demo,
    /// Render a JSON scene description ("-" reads stdin)
    Render { scene: PathBuf },
    /// Frame lines of text read from a file (stdin when omitted)
    Frame {
        file: Option<PathBuf>,
        /// Blank cells between border and text
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        margin: i64,
        /// Border character
        #[arg(short = 'c', long, default_value_t = '*')]
        frame_char: char,
    },
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let picture = match cli.command.unwrap_or(Cmd::Demo) {
        Cmd::Demo => charpic::demo::demo_picture(),
        Cmd::Render { scene } => {
            let src = read_input(Some(scene.as_path()))?;
            Scene::from_json(&src)?.build()?
        }
        Cmd::Frame {
            file,
            margin,
            frame_char,
        } => {
            let style = FrameStyle::new(margin, frame_char)?;
            let text = read_input(file.as_deref())?;
            frame_with(&Picture::from_text(&text), style)
        }
    };
    info!("rendering {}x{} picture", picture.width(), picture.height());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    picture.write_to(&mut out).context("failed to write picture")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
