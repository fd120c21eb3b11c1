use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::PipelineError;

/// Fixed file layout of one pipeline data directory
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub root: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new("data")
    }
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory of `<folder>/transcript.md` raw inputs
    pub fn raw_dir(&self) -> PathBuf {
        self.root.join("raw")
    }

    pub fn transcripts(&self) -> PathBuf {
        self.root.join("transcripts.json")
    }

    pub fn segments(&self) -> PathBuf {
        self.root.join("segments.json")
    }

    pub fn stats(&self) -> PathBuf {
        self.root.join("stats.json")
    }

    pub fn frameworks(&self) -> PathBuf {
        self.root.join("frameworks.json")
    }

    pub fn insights(&self) -> PathBuf {
        self.root.join("insights.json")
    }

    pub fn contradictions(&self) -> PathBuf {
        self.root.join("contradictions.json")
    }

    pub fn bundle(&self) -> PathBuf {
        self.root.join("bundle.json")
    }

    /// Fail with `MissingInput` for the first path that does not exist
    pub fn require<P: AsRef<Path>>(stage: &'static str, paths: &[P]) -> Result<()> {
        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                return Err(PipelineError::MissingInput {
                    stage,
                    path: path.to_path_buf(),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = DataPaths::new("/tmp/corpus");
        assert_eq!(paths.raw_dir(), PathBuf::from("/tmp/corpus/raw"));
        assert_eq!(paths.frameworks(), PathBuf::from("/tmp/corpus/frameworks.json"));
        assert_eq!(DataPaths::default().root, PathBuf::from("data"));
    }

    #[test]
    fn test_require_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths::new(dir.path());

        let err = DataPaths::require("extract", &[&paths.transcripts()]).unwrap_err();
        match err.downcast_ref::<PipelineError>() {
            Some(PipelineError::MissingInput { stage, path }) => {
                assert_eq!(*stage, "extract");
                assert_eq!(path, &paths.transcripts());
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(DataPaths::require("ingest", &[dir.path()]).is_ok());
    }
}
