//! File attachments.

use std::path::{Path, PathBuf};

use crate::errors::UnionError;

/// A file to be sent: exactly one of a server-side ID, a local path, or
/// in-memory bytes.
///
/// Constructing an `InputFile` never touches the filesystem. A
/// [`InputFile::LocalPath`] is read only when the request body is built.
#[derive(Clone, PartialEq, Eq)]
pub enum InputFile {
    /// A `file_id` (or HTTP URL) the server already knows.
    RemoteId(String),
    /// A file on the local filesystem, uploaded under its base name.
    LocalPath(PathBuf),
    /// In-memory content uploaded as `filename`.
    Bytes {
        /// Name reported in the multipart `filename` parameter.
        filename: String,
        /// Raw file content.
        content: Vec<u8>,
    },
}

impl InputFile {
    /// Reference a file the server already holds.
    pub fn id(id: impl Into<String>) -> Self {
        Self::RemoteId(id.into())
    }

    /// Upload the file at `path`.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::LocalPath(path.into())
    }

    /// Upload `content` as `filename`.
    pub fn bytes(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self::Bytes { filename: filename.into(), content: content.into() }
    }

    /// Build from the loose three-field form (ID, path or name, content).
    ///
    /// Empty strings count as unset. `content` requires `path` (it names
    /// the upload) and excludes `id`.
    pub fn from_parts(
        id:      Option<String>,
        path:    Option<PathBuf>,
        content: Option<Vec<u8>>,
    ) -> Result<Self, UnionError> {
        const UNION: &str = "InputFile";
        let id   = id.filter(|s| !s.is_empty());
        let path = path.filter(|p| !p.as_os_str().is_empty());

        match (id, path, content) {
            (Some(id), None, None)          => Ok(Self::RemoteId(id)),
            (None, Some(path), None)        => Ok(Self::LocalPath(path)),
            (None, Some(path), Some(bytes)) => Ok(Self::Bytes {
                filename: path.to_string_lossy().into_owned(),
                content:  bytes,
            }),
            (None, None, _)                 => Err(UnionError::Neither { union: UNION }),
            (Some(_), _, _)                 => Err(UnionError::Both { union: UNION }),
        }
    }

    /// Reject alternatives that only hold zero values (empty ID, path or name).
    pub fn validate(&self) -> Result<(), UnionError> {
        let empty = match self {
            Self::RemoteId(id)          => id.is_empty(),
            Self::LocalPath(path)       => path.as_os_str().is_empty(),
            Self::Bytes { filename, .. } => filename.is_empty(),
        };
        if empty {
            return Err(UnionError::Neither { union: "InputFile" });
        }
        Ok(())
    }

    /// The local path, if this file is uploaded from disk.
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::LocalPath(path) => Some(path),
            _                     => None,
        }
    }
}

impl std::fmt::Debug for InputFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RemoteId(id)    => f.debug_tuple("RemoteId").field(id).finish(),
            Self::LocalPath(path) => f.debug_tuple("LocalPath").field(path).finish(),
            Self::Bytes { filename, content } => f
                .debug_struct("Bytes")
                .field("filename", filename)
                .field("len", &content.len())
                .finish(),
        }
    }
}
