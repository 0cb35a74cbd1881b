//! Best-effort scraping of a generated case.
//! Every scan is independent and fails soft to `None` or an empty list.

use crate::models::{ParsedCase, Solution};
use regex_lite::Regex;

pub const MAX_SUSPECTS: usize = 3;

pub fn parse_case(markdown: &str) -> ParsedCase {
    ParsedCase {
        title: extract_title(markdown),
        victim: extract_victim(markdown),
        suspects: list_suspects(markdown),
        solution: extract_solution(markdown),
    }
}

/// Reads the `<!-- culprit: NAME | rationale: TEXT -->` marker.
pub fn extract_solution(markdown: &str) -> Option<Solution> {
    let re = Regex::new(r"(?is)<!--\s*culprit:\s*(.+?)\s*\|\s*rationale:\s*(.+?)\s*-->").ok()?;
    let caps = re.captures(markdown)?;

    let culprit = caps.get(1)?.as_str().trim().to_string();
    if culprit.is_empty() {
        return None;
    }
    let rationale = caps
        .get(2)?
        .as_str()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    Some(Solution { culprit, rationale })
}

/// Bolded names from the `## Suspects` section, in document order, at most three.
pub fn list_suspects(markdown: &str) -> Vec<String> {
    let Ok(section) = Regex::new(r"(?is)##\s*Suspects(.+?)(?:\n##|\z)") else {
        return Vec::new();
    };
    let Ok(bold_name) = Regex::new(r"[-*+]\s*\*\*(.+?)\*\*") else {
        return Vec::new();
    };
    let Some(block) = section.captures(markdown).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    block
        .as_str()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| bold_name.captures(line).and_then(|c| c.get(1)))
        .map(|m| m.as_str().trim().trim_end_matches(':').trim_end().to_string())
        .filter(|name| !name.is_empty())
        .take(MAX_SUSPECTS)
        .collect()
}

/// First `# Heading` line, otherwise a `Title:` line.
pub fn extract_title(markdown: &str) -> Option<String> {
    let heading = Regex::new(r"(?m)^#[ \t]+(.+)$").ok()?;
    if let Some(m) = heading.captures(markdown).and_then(|c| c.get(1)) {
        return non_empty(m.as_str());
    }

    let label = Regex::new(r"(?mi)^\**Title:\**[ \t]*(.+)$").ok()?;
    let m = label.captures(markdown)?.get(1)?;
    non_empty(m.as_str().trim().trim_matches('"'))
}

/// The whole `Victim:` line, bold markers included.
pub fn extract_victim(markdown: &str) -> Option<String> {
    let re = Regex::new(r"(?mi)^\**Victim:\**[ \t]*\S.*$").ok()?;
    non_empty(re.find(markdown)?.as_str())
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
