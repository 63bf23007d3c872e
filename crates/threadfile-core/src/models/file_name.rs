/// Lowercased extension of `file_name`, including the leading dot.
///
/// Only the last path component is considered. Returns an empty string when
/// there is no dot, or when the only dot starts the name (`.pdf`).
pub fn file_extension(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);

    match base.rfind('.') {
        Some(idx) if idx > 0 => base[idx..].to_lowercase(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_extensions() {
        assert_eq!(file_extension("report.pdf"), ".pdf");
        assert_eq!(file_extension("REPORT.PDF"), ".pdf");
        assert_eq!(file_extension("notes.Docx"), ".docx");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
    }

    #[test]
    fn test_missing_extension() {
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension(".pdf"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn test_only_last_component_counts() {
        assert_eq!(file_extension("some.dir/file"), "");
        assert_eq!(file_extension("uploads/a.pdf"), ".pdf");
        assert_eq!(file_extension("C:\\docs\\letter.DOC"), ".doc");
    }
}
