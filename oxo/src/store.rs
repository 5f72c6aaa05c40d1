//! Persistence adapter: a string-keyed text store plus a pluggable codec.
//!
//! The store is assumed synchronous, single-writer, last-write-wins and
//! local to the running session. The engine never touches it; callers save
//! after a state change has committed, never before.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    #[display("store i/o: {_0}")]
    Io(io::Error),
    #[display("codec: {_0}")]
    Codec(CodecError),
}

#[derive(Debug, Display, Error)]
#[display("{op} failed: {message}")]
pub struct CodecError {
    pub op: &'static str,
    pub message: String,
}

impl CodecError {
    fn encode(err: impl std::fmt::Display) -> Self {
        Self {
            op: "encode",
            message: err.to_string(),
        }
    }

    fn decode(err: impl std::fmt::Display) -> Self {
        Self {
            op: "decode",
            message: err.to_string(),
        }
    }
}

/// An encode/decode pair over text. Implementations must round-trip:
/// `decode(encode(v)) == v`.
pub trait Codec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError>;
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError>;
}

/// Default codec. The persisted form of a board history is a JSON array of
/// 9-element arrays, a step is a bare integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Codec for Json {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(CodecError::encode)
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        serde_json::from_str(text).map_err(CodecError::decode)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ron;

impl Codec for Ron {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        ron::to_string(value).map_err(CodecError::encode)
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        ron::from_str(text).map_err(CodecError::decode)
    }
}

/// String-keyed text map. `put` fully overwrites any previous value.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn put(&mut self, key: &str, text: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, text: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), text.to_owned());
        Ok(())
    }
}

/// One file per key under a root directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys like "tic-tac-toe:history" are caller-chosen; strip the one
        // character that cannot appear in a file name portably.
        self.root.join(key.replace(['/', '\\'], "_"))
    }
}

impl Store for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&mut self, key: &str, text: &str) -> Result<(), StoreError> {
        fs::write(self.path_for(key), text)?;
        Ok(())
    }
}

/// A store bound to a codec, with the `load`/`save` contract the engine's
/// callers use.
#[derive(Debug, Clone)]
pub struct Storage<S, C> {
    store: S,
    codec: C,
}

impl<S: Store, C: Codec> Storage<S, C> {
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// Loads `key`, falling back to `default` when the key is absent.
    ///
    /// Undecodable text is treated the same as an absent key: the error is
    /// logged and the default returned, so one corrupt entry cannot wedge
    /// a session. Use [`Storage::try_load`] to observe the error instead.
    pub fn load_or<T, F>(&self, key: &str, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(err) => {
                tracing::warn!(key, %err, "discarding unreadable entry");
                default()
            }
        }
    }

    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(text) => Ok(Some(self.codec.decode(&text)?)),
            None => Ok(None),
        }
    }

    /// Encodes `value` and overwrites whatever `key` held before.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = self.codec.encode(value)?;
        self.store.put(key, &text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxo_types::{Board, Player};

    #[test]
    fn absent_key_yields_default() {
        let storage = Storage::new(MemoryStore::new(), Json);
        let step: usize = storage.load_or("step", || 7);
        assert_eq!(step, 7);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut storage = Storage::new(MemoryStore::new(), Json);
        let history = vec![Board::empty(), Board::empty().with_move(4, Player::X)];
        storage.save("history", &history).unwrap();
        storage.save("step", &1usize).unwrap();

        let loaded: Vec<Board> = storage.load_or("history", Vec::new);
        assert_eq!(loaded, history);
        let step: usize = storage.load_or("step", || 0);
        assert_eq!(step, 1);
    }

    #[test]
    fn ron_codec_round_trips() {
        let mut storage = Storage::new(MemoryStore::new(), Ron);
        let board = Board::empty().with_move(0, Player::O);
        storage.save("board", &board).unwrap();
        let loaded: Board = storage.load_or("board", Board::empty);
        assert_eq!(loaded, board);
    }

    #[test]
    fn board_json_is_nullable_array() {
        let text = Json.encode(&Board::empty().with_move(1, Player::X)).unwrap();
        assert_eq!(text, r#"[null,"X",null,null,null,null,null,null,null]"#);
    }

    #[test]
    fn corrupt_text_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.put("step", "not a number").unwrap();
        let storage = Storage::new(store, Json);
        assert!(matches!(storage.try_load::<usize>("step"), Err(_)));
        let step: usize = storage.load_or("step", || 0);
        assert_eq!(step, 0);
    }

    #[test]
    fn save_overwrites_previous_value() {
        let mut storage = Storage::new(MemoryStore::new(), Json);
        storage.save("step", &1usize).unwrap();
        storage.save("step", &2usize).unwrap();
        let step: usize = storage.load_or("step", || 0);
        assert_eq!(step, 2);
    }

    #[test]
    fn dir_store_round_trips_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirStore::new(dir.path()).unwrap();
        assert_eq!(store.get("missing").unwrap(), None);
        store.put("tic-tac-toe:step", "3").unwrap();
        assert_eq!(store.get("tic-tac-toe:step").unwrap().as_deref(), Some("3"));
    }
}
