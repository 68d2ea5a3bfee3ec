use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Formats the screening service can parse. Used as the file-picker filter
/// hint; selection of other types is not rejected here.
pub const SUPPORTED_RESUME_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// One resume chosen in the file picker: where to read it from and the
/// filename to report to the screening service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFile {
    path: PathBuf,
    filename: String,
}

impl ResumeFile {
    /// Derives the display filename from the final path component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, filename }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn has_supported_extension(&self) -> bool {
        self.path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                SUPPORTED_RESUME_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

/// The current file selection of the screener form.
///
/// Replaced wholesale on every picker change; never appended to. No
/// deduplication and no size validation, mirroring the picker semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSelection {
    files: Vec<ResumeFile>,
}

impl ResumeSelection {
    pub fn new(files: Vec<ResumeFile>) -> Self {
        Self { files }
    }

    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(paths.into_iter().map(ResumeFile::from_path).collect())
    }

    pub fn files(&self) -> &[ResumeFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_final_path_component() {
        let file = ResumeFile::from_path("/tmp/uploads/jane_doe.pdf");
        assert_eq!(file.filename(), "jane_doe.pdf");
    }

    #[test]
    fn test_supported_extension_is_case_insensitive() {
        assert!(ResumeFile::from_path("/tmp/a.PDF").has_supported_extension());
        assert!(ResumeFile::from_path("/tmp/a.docx").has_supported_extension());
        assert!(!ResumeFile::from_path("/tmp/a.png").has_supported_extension());
        assert!(!ResumeFile::from_path("/tmp/noext").has_supported_extension());
    }

    #[test]
    fn test_selection_replaced_wholesale() {
        let first = ResumeSelection::from_paths(["/tmp/a.pdf", "/tmp/b.pdf"]);
        assert_eq!(first.len(), 2);

        let second = ResumeSelection::from_paths(["/tmp/c.pdf"]);
        assert_eq!(second.len(), 1);
        assert_eq!(second.files()[0].filename(), "c.pdf");
    }

    #[test]
    fn test_default_selection_is_empty() {
        assert!(ResumeSelection::default().is_empty());
    }
}
