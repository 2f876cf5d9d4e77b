//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use textgauge_core::markdown;

pub mod analyze;
pub mod info;
pub mod plagiarism;
pub mod readability;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod tone;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read a document for analysis, reducing Markdown files to their prose.
pub fn read_document(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = read_input_file(path, max_bytes)?;
    if markdown::is_markdown_path(path.as_std_path()) {
        tracing::debug!(file = %path, "stripping markdown");
        return Ok(markdown::strip_to_prose(&content));
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn oversized_input_is_rejected_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "big.txt", &"word ".repeat(100));
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input_file(Utf8Path::new("/nonexistent/essay.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/essay.txt"));
    }

    #[test]
    fn markdown_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "doc.md", "# Title\n\nSome prose here.\n");
        assert_eq!(read_document(&path, None).unwrap(), "Some prose here.");

        let plain = write_temp(&dir, "doc.txt", "# Title\n");
        assert_eq!(read_document(&plain, None).unwrap(), "# Title\n");
    }
}
