//! Profile image data URIs.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Errors that can occur when loading a profile image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read image {path}: {message}")]
    Read { path: String, message: String },
}

/// Read an image file and encode it as a `data:` URI.
pub fn image_data_uri(path: &Path) -> Result<String, ImageError> {
    let bytes = fs::read(path).map_err(|e| ImageError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mime = mime_from_path(path).unwrap_or("application/octet-stream");
    Ok(encode_data_uri(mime, &bytes))
}

/// Encode raw bytes as a base64 `data:` URI.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Guess an image MIME type from the file extension.
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        _ => None,
    }
}

/// Whether an image source stands for "no image".
///
/// An empty source or the empty data URI (`data:,`) that an unset image
/// element reports both count.
pub fn is_placeholder(src: &str) -> bool {
    src.trim().is_empty() || src.contains("data:,")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn encodes_png_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("me.PNG");
        fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let uri = image_data_uri(&path).unwrap();

        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("avatar.raw");
        fs::write(&path, b"abc").unwrap();

        let uri = image_data_uri(&path).unwrap();

        assert!(uri.starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = image_data_uri(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(ImageError::Read { .. })));
    }

    #[test]
    fn detects_placeholders() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("data:,"));
        assert!(!is_placeholder("data:image/png;base64,iVBORw=="));
    }
}
