use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    /// Upload content type is not accepted for the target folder.
    #[error("File type {mime} is not allowed for {kind}")]
    UnsupportedType { kind: String, mime: String },

    /// Upload exceeds the size limit of the target folder.
    #[error("File exceeds the {limit_mb} MB limit")]
    TooLarge { limit_mb: usize },

    /// File name contains a path separator or parent reference.
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    /// Operation is not possible for the requested folder.
    #[error("Files cannot be moved into {0}")]
    InvalidKind(String),

    /// Multipart body has no `file` field.
    #[error("No file uploaded")]
    MissingFile,

    /// Multipart body could not be read.
    #[error("Malformed upload: {0}")]
    Multipart(String),

    /// Requested file does not exist in the folder.
    #[error("File {0} not found")]
    NotFound(String),

    /// Any other file system failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
