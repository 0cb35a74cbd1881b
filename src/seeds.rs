use crate::error::{CaseError, Result};
use rand::seq::SliceRandom;
use serde_json::Value;
use std::path::Path;

/// One JSON value per non-blank line, in file order.
pub fn load_seeds(path: &Path) -> Result<Vec<Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| CaseError::io(path, e))?;
    parse_seeds(path, &text)
}

fn parse_seeds(path: &Path, text: &str) -> Result<Vec<Value>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| CaseError::SeedParse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })
        })
        .collect()
}

pub fn choose_seed(seeds: &[Value]) -> Option<&Value> {
    let mut rng = rand::thread_rng();
    seeds.choose(&mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"region\": \"bayou\"}}").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "   ").unwrap();
        writeln!(file, "{{\"region\": \"ridge\", \"weather\": [\"fog\"]}}").unwrap();

        let seeds = load_seeds(file.path()).unwrap();
        assert_eq!(
            seeds,
            vec![
                json!({ "region": "bayou" }),
                json!({ "region": "ridge", "weather": ["fog"] })
            ]
        );
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = parse_seeds(Path::new("seeds.jsonl"), "{\"a\": 1}\n\n{not json}\n").unwrap_err();
        match err {
            CaseError::SeedParse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_seeds(&dir.path().join("absent.jsonl")).unwrap_err();
        match err {
            CaseError::Io { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_choose_seed() {
        assert!(choose_seed(&[]).is_none());

        let seeds = vec![json!(1), json!(2)];
        let picked = choose_seed(&seeds).unwrap();
        assert!(seeds.contains(picked));
    }
}
