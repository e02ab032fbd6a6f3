//! Disk-backed media store.
//!
//! Files live in one folder per [`MediaKind`] under the public directory and are served
//! statically from `/<folder>/<name>`. Stored names are a fresh UUID plus the original
//! extension, so an upload never overwrites an existing file.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, SystemTime},
};

use uuid::Uuid;

use crate::server::{error::media::MediaError, model::media::MediaKind};

const ALL_KINDS: [MediaKind; 4] = [
    MediaKind::Photo,
    MediaKind::Video,
    MediaKind::Pdf,
    MediaKind::Temp,
];

/// Public URL of a stored file.
pub fn url_for(kind: MediaKind, file_name: &str) -> String {
    format!("/{}/{}", kind.folder(), file_name)
}

/// Rejects names that could escape the media folder.
pub fn validate_file_name(file_name: &str) -> Result<(), MediaError> {
    let invalid = file_name.is_empty()
        || file_name.contains(['/', '\\', '\0'])
        || file_name.contains("..")
        || file_name.starts_with('.');

    if invalid {
        return Err(MediaError::InvalidFileName(file_name.to_string()));
    }

    Ok(())
}

/// Checks an upload against the content types and size limit of its folder.
pub fn validate_upload(kind: MediaKind, content_type: &str, size: usize) -> Result<(), MediaError> {
    if !kind.allowed_types().contains(&content_type) {
        return Err(MediaError::UnsupportedType {
            kind: kind.folder().to_string(),
            mime: content_type.to_string(),
        });
    }
    if size > kind.max_bytes() {
        return Err(MediaError::TooLarge {
            limit_mb: kind.max_bytes() / (1024 * 1024),
        });
    }

    Ok(())
}

/// Lowercased alphanumeric extension of an uploaded file name, if it has one.
fn extension_of(original_name: &str) -> Option<String> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
}

#[derive(Clone, Debug)]
pub struct MediaStore {
    root: Arc<PathBuf>,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder(&self, kind: MediaKind) -> PathBuf {
        self.root.join(kind.folder())
    }

    fn path_of(&self, kind: MediaKind, file_name: &str) -> Result<PathBuf, MediaError> {
        validate_file_name(file_name)?;
        Ok(self.folder(kind).join(file_name))
    }

    /// Creates every media folder that does not exist yet.
    pub async fn ensure_dirs(&self) -> Result<(), MediaError> {
        for kind in ALL_KINDS {
            tokio::fs::create_dir_all(self.folder(kind)).await?;
        }

        Ok(())
    }

    /// Validates and writes an upload under a fresh name.
    ///
    /// # Arguments
    /// - `kind` - Target folder
    /// - `original_name` - Client-supplied file name, used only for its extension
    /// - `content_type` - Client-supplied MIME type
    /// - `bytes` - File content
    ///
    /// # Returns
    /// - `Ok(String)` - Stored file name
    /// - `Err(MediaError::UnsupportedType)` - MIME type not accepted for the folder
    /// - `Err(MediaError::TooLarge)` - Content exceeds the folder's size limit
    /// - `Err(MediaError::Io)` - Write failed
    pub async fn save(
        &self,
        kind: MediaKind,
        original_name: Option<&str>,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, MediaError> {
        validate_upload(kind, content_type, bytes.len())?;

        let file_name = match original_name.and_then(extension_of) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        let folder = self.folder(kind);
        tokio::fs::create_dir_all(&folder).await?;
        tokio::fs::write(folder.join(&file_name), bytes).await?;

        tracing::debug!("Stored {} in {}", file_name, kind.folder());

        Ok(file_name)
    }

    /// Moves a staged upload from the temp folder into a permanent folder.
    ///
    /// # Returns
    /// - `Ok(())` - File moved
    /// - `Err(MediaError::InvalidKind)` - Target is the temp folder
    /// - `Err(MediaError::NotFound)` - No such temp file
    pub async fn confirm(&self, file_name: &str, kind: MediaKind) -> Result<(), MediaError> {
        if kind == MediaKind::Temp {
            return Err(MediaError::InvalidKind(kind.folder().to_string()));
        }

        let from = self.path_of(MediaKind::Temp, file_name)?;
        let to = self.path_of(kind, file_name)?;
        tokio::fs::create_dir_all(self.folder(kind)).await?;

        tokio::fs::rename(&from, &to).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => MediaError::NotFound(file_name.to_string()),
            _ => MediaError::Io(e),
        })
    }

    /// Deletes a stored file.
    ///
    /// # Returns
    /// - `Ok(())` - File deleted
    /// - `Err(MediaError::NotFound)` - No such file in the folder
    /// - `Err(MediaError::InvalidFileName)` - Name could escape the folder
    pub async fn delete(&self, kind: MediaKind, file_name: &str) -> Result<(), MediaError> {
        let path = self.path_of(kind, file_name)?;

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => MediaError::NotFound(file_name.to_string()),
                _ => MediaError::Io(e),
            })
    }

    /// Deletes a stored file, treating a missing file as already deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - File deleted
    /// - `Ok(false)` - File did not exist
    /// - `Err(MediaError)` - Invalid name or any other I/O failure
    pub async fn delete_quietly(&self, kind: MediaKind, file_name: &str) -> Result<bool, MediaError> {
        match self.delete(kind, file_name).await {
            Ok(()) => Ok(true),
            Err(MediaError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Deletes temp files last modified at least `max_age` ago.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of files removed
    /// - `Err(MediaError::Io)` - The temp folder could not be read
    pub async fn purge_temp(&self, max_age: Duration) -> Result<usize, MediaError> {
        let folder = self.folder(MediaKind::Temp);
        let mut entries = match tokio::fs::read_dir(&folder).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let now = SystemTime::now();
        let mut removed = 0;

        while let Some(entry) = entries.next_entry().await? {
            let metadata = match entry.metadata().await {
                Ok(metadata) if metadata.is_file() => metadata,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("Failed to stat temp file {:?}: {}", entry.path(), e);
                    continue;
                }
            };

            let age = metadata
                .modified()
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .unwrap_or_default();
            if age < max_age {
                continue;
            }

            match tokio::fs::remove_file(entry.path()).await {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("Failed to delete temp file {:?}: {}", entry.path(), e),
            }
        }

        Ok(removed)
    }
}
