use rand::Rng;
use serde_json::Value;
use std::fmt;

pub const CASE_PROMPT: &str = r#"SYSTEM: You are a mystery editor. Create a FICTIONAL, SOLVABLE case from a seed.
Never use real names or exact places. One HUMAN suspect must be the culprit.
Include 1–2 flavor-appropriate red herrings (cryptid/cult/etc.), but the solution must be human.
Output STRICTLY in Markdown with EXACT sections, then embed the solution as an HTML comment.

USER:
Seed (do not copy literally; use only vibes/priors):
{SEED_JSON}

Write Markdown with these sections and nothing else:
Title: "Case {CASE_ID} — Incident near {fictional_location}"
Case Type: one of [classic, appalachian, cryptid, cult] to match the seed vibe
Victim: name, age, "last seen" time/place (fictionalized)

## Timeline
- 5–6 concise beats with times; weave weather/terrain from the seed

## Suspects
- 2–3 suspects: each has relation, motive hint, alibi, and a quirk

## Evidence
- 6–9 items; include exactly TWO that subtly implicate ONE suspect
- include 1–2 flavor red herrings (cryptid/cult/etc.) that are NOT the true cause

## Contradictions
- 1–2 contradictions that cast doubt on an innocent suspect's alibi

Embed ONLY ONE HTML comment for solution, exactly:
<!-- culprit: NAME | rationale: reference 2–3 evidence items concisely -->

Constraints:
- All names/places invented. No real people or addresses.
- Keep it solvable, forensic, atmospheric.
"#;

/// Short random tag for one generated case: 16 bits in upper-case hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseId(String);

impl CaseId {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::from_bits(rng.gen())
    }

    pub fn from_bits(bits: u16) -> Self {
        Self(format!("{:X}", bits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn render_prompt(seed: &Value, case_id: &CaseId) -> String {
    // Value serialization cannot fail; fall back to the compact form anyway.
    let seed_json = serde_json::to_string_pretty(seed).unwrap_or_else(|_| seed.to_string());

    CASE_PROMPT
        .replace("{CASE_ID}", case_id.as_str())
        .replace("{SEED_JSON}", &seed_json)
}

pub fn build_prompt(seed: &Value) -> (String, CaseId) {
    let case_id = CaseId::random();
    (render_prompt(seed, &case_id), case_id)
}
