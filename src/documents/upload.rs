use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::validator::DocumentKind;

/// An upload written to its own file in the upload directory.
///
/// The file is removed when the guard is released or dropped, so every exit
/// path of a request gives its file back. Paths are unique per upload: a
/// random component followed by the sanitized original name.
pub struct ScopedUpload {
    file: NamedTempFile,
    filename: String,
    kind: DocumentKind,
}

impl ScopedUpload {
    pub async fn persist(
        dir: &Path,
        filename: &str,
        kind: DocumentKind,
        data: Vec<u8>,
    ) -> io::Result<Self> {
        let dir = dir.to_path_buf();
        let suffix = format!("-{}", filename);

        let file = tokio::task::spawn_blocking(move || -> io::Result<NamedTempFile> {
            let mut file = tempfile::Builder::new()
                .prefix("upload-")
                .suffix(&suffix)
                .tempfile_in(&dir)?;
            file.write_all(&data)?;
            file.flush()?;
            Ok(file)
        })
        .await
        .map_err(io::Error::other)??;

        tracing::debug!(path = %file.path().display(), "Upload stored");

        Ok(Self {
            file,
            filename: filename.to_string(),
            kind,
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Delete the stored file now, logging instead of failing if it is already gone.
    pub fn release(self) {
        let path: PathBuf = self.file.path().to_path_buf();
        match self.file.close() {
            Ok(()) => tracing::debug!(path = %path.display(), "Upload removed"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to remove upload"),
        }
    }
}
