//! File attachment resolution.
//!
//! Decides how one [`InputFile`] travels: as a plain text value the server
//! already understands, or as a binary part of a multipart body. Nothing
//! here touches the filesystem; a local file is read by the request
//! builder, and only then.

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use courier_types::InputFile;

/// Where the bytes of a binary part come from.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PartSource<'a> {
    /// Read this file when the body is built.
    Path(&'a Path),
    /// Use these bytes as they are.
    Bytes(&'a [u8]),
}

impl fmt::Debug for PartSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path)   => f.debug_tuple("Path").field(path).finish(),
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// A binary part waiting to be assembled into a request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPart<'a> {
    /// Value of the part's `filename` parameter.
    pub filename: Cow<'a, str>,
    #[allow(missing_docs)]
    pub source: PartSource<'a>,
}

/// Outcome of [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// Send this text as the field value; no bytes are transferred.
    Inline(&'a str),
    /// Send a binary part.
    Part(PendingPart<'a>),
}

/// Pick the wire strategy for `file`.
pub fn resolve(file: &InputFile) -> Resolved<'_> {
    match file {
        InputFile::RemoteId(id) => Resolved::Inline(id),
        InputFile::LocalPath(path) => Resolved::Part(PendingPart {
            filename: base_name(path),
            source:   PartSource::Path(path),
        }),
        InputFile::Bytes { filename, content } => Resolved::Part(PendingPart {
            filename: Cow::Borrowed(filename),
            source:   PartSource::Bytes(content),
        }),
    }
}

/// Last path component, or the whole path when there is none (`/`, `..`).
fn base_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None       => path.to_string_lossy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_id_is_inline() {
        let file = InputFile::id("AgACAgIAAxk");
        assert_eq!(resolve(&file), Resolved::Inline("AgACAgIAAxk"));
    }

    #[test]
    fn local_path_uses_base_name() {
        let file = InputFile::path("/tmp/uploads/cat.png");
        match resolve(&file) {
            Resolved::Part(part) => {
                assert_eq!(part.filename, "cat.png");
                assert_eq!(part.source, PartSource::Path(Path::new("/tmp/uploads/cat.png")));
            }
            other => panic!("expected a part, got {other:?}"),
        }
    }

    #[test]
    fn path_without_file_name_falls_back_to_full_text() {
        assert_eq!(base_name(Path::new("..")), "..");
    }

    #[test]
    fn bytes_are_borrowed() {
        let file = InputFile::bytes("thumb.jpg", vec![7u8; 10]);
        let Resolved::Part(part) = resolve(&file) else { panic!("expected a part") };
        assert_eq!(part.filename, "thumb.jpg");
        assert_eq!(part.source, PartSource::Bytes(&[7u8; 10]));
        assert_eq!(format!("{:?}", part.source), "Bytes(10 bytes)");
    }
}
