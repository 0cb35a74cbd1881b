use crate::error::{CaseError, Result};
use crate::prompt::CaseId;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn case_file_name(date: NaiveDate, case_id: &CaseId) -> String {
    format!("CASE_{}_{}.md", date.format("%Y-%m-%d"), case_id)
}

/// Writes the markdown untouched to `{outdir}/CASE_{today}_{id}.md`.
pub fn save_case(markdown: &str, outdir: &Path, case_id: &CaseId) -> Result<PathBuf> {
    fs::create_dir_all(outdir).map_err(|e| CaseError::io(outdir, e))?;

    let path = outdir.join(case_file_name(Local::now().date_naive(), case_id));
    fs::write(&path, markdown).map_err(|e| CaseError::io(&path, e))?;

    info!("Saved case {} to {}", case_id, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            case_file_name(date, &CaseId::from_bits(0x3f2a)),
            "CASE_2024-03-07_3F2A.md"
        );
    }

    #[test]
    fn test_save_creates_dirs_and_keeps_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let outdir = dir.path().join("nested").join("cases");
        let markdown = "# Case — Ridge\r\n\n<!-- culprit: X | rationale: y -->  \n\u{1F56F}";

        let path = save_case(markdown, &outdir, &CaseId::from_bits(0xabc)).unwrap();

        assert!(path.starts_with(&outdir));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("CASE_") && name.ends_with("_ABC.md"));
        assert_eq!(fs::read(&path).unwrap(), markdown.as_bytes());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let id = CaseId::from_bits(1);
        save_case("first", dir.path(), &id).unwrap();
        let path = save_case("second", dir.path(), &id).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
