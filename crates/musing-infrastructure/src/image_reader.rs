//! Filesystem-backed avatar image reading.

use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use musing_core::error::Result;
use musing_core::port::ImageReader;
use musing_core::view::ImageFile;
use tokio::fs;

/// Infers the MIME type from a path extension using `mime_guess`.
fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Describes a local file the way a file picker would: path, size and
/// guessed MIME type. The file is not read.
pub async fn image_file_from_path(path: &Path) -> Result<ImageFile> {
    let metadata = fs::metadata(path).await?;
    Ok(ImageFile {
        path: path.to_path_buf(),
        size_bytes: metadata.len(),
        mime_type: infer_mime_type(path),
    })
}

/// Reads images from the local filesystem into `data:` URLs.
#[derive(Debug, Clone, Default)]
pub struct FsImageReader;

#[async_trait::async_trait]
impl ImageReader for FsImageReader {
    async fn read_data_url(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let mime_type = infer_mime_type(path);
        tracing::debug!(
            "[FsImageReader] Read {} bytes from {}",
            bytes.len(),
            path.display()
        );
        Ok(format!(
            "data:{};base64,{}",
            mime_type,
            BASE64_STANDARD.encode(&bytes)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_png_as_data_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let url = FsImageReader.read_data_url(&path).await.unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_image_file_reports_size_and_mime() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("avatar.jpg");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let file = image_file_from_path(&path).await.unwrap();
        assert_eq!(file.size_bytes, 2048);
        assert_eq!(file.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = FsImageReader
            .read_data_url(&temp_dir.path().join("nope.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, musing_core::MusingError::Io { .. }));
    }
}
