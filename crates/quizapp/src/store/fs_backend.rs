use super::backend::StorageBackend;
use crate::error::{QuizError, Result};
use crate::model::Quiz;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "quizzes.json";

pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(QuizError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .data_file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_DATA_FILE);
        self.data_file
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_quizzes(&self) -> Result<Option<Vec<Quiz>>> {
        let content = match fs::read_to_string(&self.data_file) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(QuizError::Io(e)),
        };
        let quizzes: Vec<Quiz> =
            serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        Ok(Some(quizzes))
    }

    fn save_quizzes(&self, quizzes: &[Quiz]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(quizzes).map_err(QuizError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(QuizError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.data_file) {
            let _ = fs::remove_file(&tmp_path);
            return Err(QuizError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.data_file.display().to_string()
    }
}
