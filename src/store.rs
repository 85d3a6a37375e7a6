use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::error::AppError;

lazy_static! {
    // Only names we generate ourselves: lowercase hex UUID + fixed extension.
    static ref ARTIFACT_NAME: Regex =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\.mp3$")
            .unwrap();
}

/// A freshly allocated audio artifact, not yet written.
#[derive(Debug)]
pub struct AudioArtifact {
    pub file_name: String,
    pub path: PathBuf,
}

impl AudioArtifact {
    pub fn url(&self) -> String {
        format!("/audio/{}", self.file_name)
    }
}

/// Directory on local disk holding generated audio files.
///
/// Files are written once and never mutated; nothing deletes them.
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
}

impl AudioStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create the store directory if it does not exist yet.
    pub fn init(&self) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Reserve a fresh artifact name. UUID v4, so collisions across
    /// concurrent calls are negligible.
    pub fn allocate(&self) -> AudioArtifact {
        let file_name = format!("{}.mp3", Uuid::new_v4());
        let path = self.dir.join(&file_name);
        AudioArtifact { file_name, path }
    }

    /// Map a caller-supplied filename back to a path inside the store.
    ///
    /// Names that don't match the generated pattern are rejected outright,
    /// so traversal sequences and foreign extensions never touch the
    /// filesystem.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        if !ARTIFACT_NAME.is_match(file_name) {
            return None;
        }
        Some(self.dir.join(file_name))
    }

    pub async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), AppError> {
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    pub async fn read(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        Ok(tokio::fs::read(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> AudioStore {
        AudioStore::new(PathBuf::from("/tmp/audio-store-test"))
    }

    #[test]
    fn allocates_uuid_mp3_names() {
        let artifact = store().allocate();
        assert!(ARTIFACT_NAME.is_match(&artifact.file_name));
        assert_eq!(artifact.url(), format!("/audio/{}", artifact.file_name));
    }

    #[test]
    fn allocations_are_distinct() {
        let s = store();
        assert_ne!(s.allocate().file_name, s.allocate().file_name);
    }

    #[test]
    fn resolves_generated_names() {
        let s = store();
        let artifact = s.allocate();
        assert_eq!(s.resolve(&artifact.file_name), Some(artifact.path));
    }

    #[test]
    fn rejects_traversal_attempts() {
        let s = store();
        assert_eq!(s.resolve("../etc/passwd"), None);
        assert_eq!(s.resolve("..%2f..%2fetc%2fpasswd"), None);
        assert_eq!(s.resolve("/etc/passwd"), None);
        assert_eq!(s.resolve("foo/bar.mp3"), None);
    }

    #[test]
    fn rejects_foreign_names() {
        let s = store();
        assert_eq!(s.resolve("notes.txt"), None);
        assert_eq!(s.resolve("deadbeef.mp3"), None);
        // Uppercase hex is not a name we generate
        assert_eq!(
            s.resolve("AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE.mp3"),
            None
        );
    }

    #[tokio::test]
    async fn round_trips_bytes_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let s = AudioStore::new(tmp.path().to_path_buf());
        s.init().unwrap();

        let artifact = s.allocate();
        s.write(&artifact.path, b"mp3 bytes").await.unwrap();
        assert_eq!(s.read(&artifact.path).await.unwrap(), b"mp3 bytes");
    }
}
