// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// A selected folder or file does not exist.
    PathNotFound(PathBuf),
    /// A folder exists but holds no allow-listed images.
    EmptyFolder(PathBuf),
    /// A file exists but cannot be parsed as an image.
    Decode(String),
    /// The requested transform would allocate an unreasonably large bitmap.
    RenderTooLarge {
        width: u64,
        height: u64,
    },
    /// A directory traversal was superseded by a newer one.
    Cancelled,
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::PathNotFound(_) => "status-path-not-found",
            Error::EmptyFolder(_) => "status-no-images",
            Error::Decode(_) => "placeholder-cannot-load",
            Error::RenderTooLarge { .. } => "placeholder-too-large",
            Error::Cancelled => "error-cancelled",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::PathNotFound(path) => write!(f, "Path does not exist: {}", path.display()),
            Error::EmptyFolder(path) => write!(f, "No images found in {}", path.display()),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::RenderTooLarge { width, height } => {
                write!(f, "Render Error: {}x{} exceeds the pixel budget", width, height)
            }
            Error::Cancelled => write!(f, "Scan cancelled"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn path_not_found_mentions_the_path() {
        let err = Error::PathNotFound(PathBuf::from("/datasets/market"));
        assert!(format!("{}", err).contains("/datasets/market"));
        assert_eq!(err.i18n_key(), "status-path-not-found");
    }

    #[test]
    fn image_format_error_becomes_decode() {
        let err: Error = image_rs::ImageError::Unsupported(
            image_rs::error::UnsupportedError::from_format_and_kind(
                image_rs::error::ImageFormatHint::Unknown,
                image_rs::error::UnsupportedErrorKind::GenericFeature("test".into()),
            ),
        )
        .into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn render_too_large_reports_dimensions() {
        let err = Error::RenderTooLarge {
            width: 90_000,
            height: 40_000,
        };
        assert!(format!("{}", err).contains("90000x40000"));
    }
}
