use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::models::QuizItem;
use crate::quiz::{PoolError, QuestionPool};

/// Errors raised while reading a question pool from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid question pool in {path}: {source}")]
    Pool {
        path: String,
        #[source]
        source: PoolError,
    },
}

/// Load and validate a pool from a JSON array of quiz items.
pub fn load_pool_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionPool, LoadError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: shown.clone(),
        source,
    })?;

    let items: Vec<QuizItem> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: shown.clone(),
            source,
        })?;

    let pool = QuestionPool::new(items).map_err(|source| LoadError::Pool {
        path: shown.clone(),
        source,
    })?;

    tracing::info!(path = %shown, questions = pool.len(), "loaded question pool");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_pool() {
        let file = write_json(
            r#"[
                {"prompt": "Romakat", "audio_text": "Romakat", "options": ["走", "跑"], "correct_answer": "走", "hint": "Rakat + om"},
                {"prompt": "Comikay", "options": ["走", "跑"], "correct_answer": "跑", "hint": "Cikay + om"}
            ]"#,
        );

        let pool = load_pool_from_json(file.path()).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(pool.items()[0].has_audio());
        assert!(!pool.items()[1].has_audio());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_pool_from_json("/nonexistent/o-rakat/pool.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_json(r#"[{"prompt": "missing fields"}]"#);
        let err = load_pool_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_unanswerable_question() {
        let file = write_json(
            r#"[{"prompt": "Tala", "options": ["前往", "回家"], "correct_answer": "前往 ", "hint": "Direction"}]"#,
        );
        let err = load_pool_from_json(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Pool {
                source: PoolError::MissingAnswer { .. },
                ..
            }
        ));
    }
}
