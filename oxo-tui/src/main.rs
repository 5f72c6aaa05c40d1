use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use oxo::{
    store::{Codec, CodecError},
    DirStore, Game, Json, Ron, Storage,
};
use oxo_types::Board;
use serde::{de::DeserializeOwned, Serialize};
use tracing_subscriber::EnvFilter;

use app::{App, StorageKeys};

pub mod app;
pub mod board;
pub mod history;

#[derive(Debug, Parser)]
#[command(about = "Tic-tac-toe with a persisted, replayable move history")]
struct Args {
    /// Directory the store keeps one file per key in.
    #[arg(long, default_value = "saves")]
    data_dir: PathBuf,
    /// Store key for the serialized history.
    #[arg(long, default_value = "tic-tac-toe:history")]
    history_key: String,
    /// Store key for the serialized step cursor.
    #[arg(long, default_value = "tic-tac-toe:step")]
    step_key: String,
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
    /// Write tracing output here (raw mode owns the terminal).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Ron,
}

/// Codec picked at startup from the command line.
enum AnyCodec {
    Json(Json),
    Ron(Ron),
}

impl Codec for AnyCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        match self {
            AnyCodec::Json(c) => c.encode(value),
            AnyCodec::Ron(c) => c.encode(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        match self {
            AnyCodec::Json(c) => c.decode(text),
            AnyCodec::Ron(c) => c.decode(text),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let codec = match args.format {
        Format::Json => AnyCodec::Json(Json),
        Format::Ron => AnyCodec::Ron(Ron),
    };
    let storage = Storage::new(DirStore::new(&args.data_dir)?, codec);
    let keys = StorageKeys {
        history: args.history_key,
        step: args.step_key,
    };

    let history: Vec<Board> = storage.load_or(&keys.history, || vec![Board::empty()]);
    let step: usize = storage.load_or(&keys.step, || 0);
    let game = Game::from_parts(history, step);

    let terminal = ratatui::init();
    let result = App::new(game, storage, keys).run(terminal);
    ratatui::restore();
    result.map_err(Into::into)
}
