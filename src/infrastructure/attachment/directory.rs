//! Directory-backed attachment sink

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{AttachmentError, AttachmentReceipt, AttachmentSink};
use crate::domain::content::OutputFile;

/// Upper bound on numbered name attempts within one session directory.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Sink that stores each attachment as a file under
/// `<root>/<session_id>/`.
///
/// Names never overwrite: a second `document.png` becomes `document-1.png`.
pub struct DirectoryAttachmentSink {
    root: PathBuf,
}

impl DirectoryAttachmentSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn session_dir(&self, session_id: &str) -> Result<PathBuf, AttachmentError> {
        let trimmed = session_id.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains(['/', '\\'])
        {
            return Err(AttachmentError::InvalidSession(session_id.to_string()));
        }
        Ok(self.root.join(trimmed))
    }
}

#[async_trait]
impl AttachmentSink for DirectoryAttachmentSink {
    async fn add_attachment(
        &self,
        session_id: &str,
        file: &OutputFile,
    ) -> Result<AttachmentReceipt, AttachmentError> {
        let dir = self.session_dir(session_id)?;

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| AttachmentError::AddFailed(format!("{}: {}", dir.display(), e)))?;

        let (stem, extension) = split_name(file.name());

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let stored_name = numbered_name(stem, extension, attempt);
            let path = dir.join(&stored_name);

            match write_new(&path, file.data()).await {
                Ok(()) => {
                    log::info!(
                        "stored {} ({}) at {}",
                        stored_name,
                        file.human_readable_size(),
                        path.display()
                    );
                    return Ok(AttachmentReceipt {
                        stored_name,
                        location: Some(path),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(AttachmentError::AddFailed(format!(
                        "{}: {}",
                        path.display(),
                        e
                    )))
                }
            }
        }

        Err(AttachmentError::AddFailed(format!(
            "no free name for {} in {}",
            file.name(),
            dir.display()
        )))
    }
}

async fn write_new(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let mut handle = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;

    let written = match handle.write_all(data).await {
        Ok(()) => handle.flush().await,
        Err(e) => Err(e),
    };
    drop(handle);

    discard_on_error(path, written).await
}

/// A file that could not be written in full is not an attachment
async fn discard_on_error(path: &Path, written: std::io::Result<()>) -> std::io::Result<()> {
    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(path).await {
            log::warn!("could not remove partial {}: {}", path.display(), cleanup);
        }
        return Err(e);
    }
    Ok(())
}

fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    }
}

fn numbered_name(stem: &str, extension: Option<&str>, attempt: u32) -> String {
    match (attempt, extension) {
        (0, Some(ext)) => format!("{}.{}", stem, ext),
        (0, None) => stem.to_string(),
        (n, Some(ext)) => format!("{}-{}.{}", stem, n, ext),
        (n, None) => format!("{}-{}", stem, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::ContentType;

    fn file(content_type: &str, data: &[u8]) -> OutputFile {
        OutputFile::new(ContentType::from(content_type), data.to_vec())
    }

    #[tokio::test]
    async fn writes_into_session_directory() {
        let root = tempfile::tempdir().unwrap();
        let sink = DirectoryAttachmentSink::new(root.path());

        let receipt = sink
            .add_attachment("draft-42", &file("text/plain", b"hello"))
            .await
            .unwrap();

        assert_eq!(receipt.stored_name, "document.txt");
        let expected = root.path().join("draft-42").join("document.txt");
        assert_eq!(receipt.location.as_deref(), Some(expected.as_path()));
        assert_eq!(std::fs::read(expected).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn repeated_names_get_numbered() {
        let root = tempfile::tempdir().unwrap();
        let sink = DirectoryAttachmentSink::new(root.path());

        let first = sink
            .add_attachment("s", &file("image/png", b"one"))
            .await
            .unwrap();
        let second = sink
            .add_attachment("s", &file("image/png", b"two"))
            .await
            .unwrap();
        let third = sink
            .add_attachment("s", &file("image/png", b"three"))
            .await
            .unwrap();

        assert_eq!(first.stored_name, "document.png");
        assert_eq!(second.stored_name, "document-1.png");
        assert_eq!(third.stored_name, "document-2.png");

        let stored = std::fs::read(root.path().join("s").join("document.png")).unwrap();
        assert_eq!(stored, b"one");
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let root = tempfile::tempdir().unwrap();
        let sink = DirectoryAttachmentSink::new(root.path());

        let a = sink
            .add_attachment("a", &file("text/html", b"<p>a</p>"))
            .await
            .unwrap();
        let b = sink
            .add_attachment("b", &file("text/html", b"<p>b</p>"))
            .await
            .unwrap();

        assert_eq!(a.stored_name, "document.html");
        assert_eq!(b.stored_name, "document.html");
    }

    #[tokio::test]
    async fn rejects_path_like_sessions() {
        let root = tempfile::tempdir().unwrap();
        let sink = DirectoryAttachmentSink::new(root.path());
        let f = file("text/plain", b"x");

        for bad in ["", "  ", ".", "..", "a/b", "..\\up"] {
            let result = sink.add_attachment(bad, &f).await;
            assert!(
                matches!(result, Err(AttachmentError::InvalidSession(_))),
                "session {:?} should be rejected",
                bad
            );
        }
    }

    #[tokio::test]
    async fn unwritable_root_is_add_failed() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, b"file, not a dir").unwrap();

        let sink = DirectoryAttachmentSink::new(&blocker);
        let result = sink.add_attachment("s", &file("text/plain", b"x")).await;
        assert!(matches!(result, Err(AttachmentError::AddFailed(_))));
    }

    #[test]
    fn numbered_names() {
        assert_eq!(numbered_name("document", Some("png"), 0), "document.png");
        assert_eq!(numbered_name("document", Some("png"), 3), "document-3.png");
        assert_eq!(numbered_name("blob", None, 2), "blob-2");
    }

    #[test]
    fn split_keeps_dotfiles_whole() {
        assert_eq!(split_name("document.jpg"), ("document", Some("jpg")));
        assert_eq!(split_name(".hidden"), (".hidden", None));
        assert_eq!(split_name("plain"), ("plain", None));
    }

    #[tokio::test]
    async fn failed_write_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("document.png");
        std::fs::write(&path, b"\x89PN").unwrap();

        let result = discard_on_error(
            &path,
            Err(std::io::Error::new(ErrorKind::Other, "disk full")),
        )
        .await;

        assert_eq!(result.unwrap_err().to_string(), "disk full");
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn successful_write_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("document.txt");

        write_new(&path, b"kept").await.unwrap();
        discard_on_error(&path, Ok(())).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"kept");
    }
}
