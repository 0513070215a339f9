use super::fs_backend::FsBackend;
use super::quiz_store::QuizStore;
use crate::error::Result;
use std::path::PathBuf;

pub type FileStore = QuizStore<FsBackend>;

impl FileStore {
    /// Opens (and seeds, if missing) the JSON file at `data_file`.
    pub fn open_file(data_file: impl Into<PathBuf>) -> Result<Self> {
        QuizStore::open(FsBackend::new(data_file))
    }
}
