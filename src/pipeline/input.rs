//! Input resolution: normalise a user-supplied path or URL to PDF bytes.
//!
//! `pdf-extract` parses from memory, so both local files and downloads end
//! up as a `Vec<u8>` — no temp files needed. We validate the PDF magic
//! bytes (`%PDF`) before handing the buffer to the extractor so callers get
//! a meaningful error rather than a parser backtrace.

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::ConvertError;

/// Check if the input string looks like a URL.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Resolve the input string to in-memory PDF bytes.
///
/// URLs are downloaded synchronously with the given timeout; anything else
/// is treated as a local file path. Either way the magic bytes are checked
/// before returning.
pub fn resolve_input(input: &str, timeout_secs: u64) -> Result<Vec<u8>, ConvertError> {
    let bytes = if is_url(input) {
        download_url(input, timeout_secs)?
    } else {
        read_local(input)?
    };
    check_pdf_magic(&bytes)?;
    Ok(bytes)
}

/// Validate that the buffer starts with the `%PDF` magic bytes.
pub fn check_pdf_magic(bytes: &[u8]) -> Result<(), ConvertError> {
    let mut magic = [0u8; 4];
    let head = bytes.get(..4).unwrap_or_default();
    magic[..head.len()].copy_from_slice(head);
    if &magic != b"%PDF" {
        return Err(ConvertError::NotAPdf { magic });
    }
    Ok(())
}

/// Read a local file, mapping the common io error kinds to typed errors.
fn read_local(path_str: &str) -> Result<Vec<u8>, ConvertError> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(ConvertError::FileNotFound { path });
    }

    match std::fs::read(&path) {
        Ok(bytes) => {
            debug!("Read local PDF: {} ({} bytes)", path.display(), bytes.len());
            Ok(bytes)
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(ConvertError::PermissionDenied { path })
        }
        Err(_) => Err(ConvertError::FileNotFound { path }),
    }
}

/// Download a URL into memory.
fn download_url(url: &str, timeout_secs: u64) -> Result<Vec<u8>, ConvertError> {
    info!("Downloading PDF from: {}", url);

    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .build();

    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(code, _) => ConvertError::DownloadFailed {
            url: url.to_string(),
            reason: format!("HTTP {code}"),
        },
        ureq::Error::Transport(t) => ConvertError::DownloadFailed {
            url: url.to_string(),
            reason: t.to_string(),
        },
    })?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut bytes)
        .map_err(|e| ConvertError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    info!("Downloaded {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_is_url() {
        assert!(is_url("https://example.com/doc.pdf"));
        assert!(is_url("http://example.com/doc.pdf"));
        assert!(!is_url("/tmp/doc.pdf"));
        assert!(!is_url("doc.pdf"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_magic_accepts_pdf_header() {
        assert!(check_pdf_magic(b"%PDF-1.7\n...").is_ok());
    }

    #[test]
    fn test_magic_rejects_other_bytes() {
        assert!(matches!(
            check_pdf_magic(b"<html>"),
            Err(ConvertError::NotAPdf { .. })
        ));
        // Shorter than four bytes is also not a PDF.
        assert!(matches!(
            check_pdf_magic(b"%P"),
            Err(ConvertError::NotAPdf { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = resolve_input("/definitely/not/a/real/file.pdf", 5);
        assert!(matches!(result, Err(ConvertError::FileNotFound { .. })));
    }

    #[test]
    fn test_local_file_with_wrong_magic() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"plain text, not a PDF").unwrap();
        let result = resolve_input(f.path().to_str().unwrap(), 5);
        assert!(matches!(result, Err(ConvertError::NotAPdf { .. })));
    }
}
