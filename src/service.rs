use crate::config::{Config, ShowMode};
use crate::error::{CaseError, Result};
use crate::extract::parse_case;
use crate::file_logger::CaseJournal;
use crate::judge::{Judge, LETTERS};
use crate::models::{ParsedCase, Verdict};
use crate::ollama::CaseClient;
use crate::prompt::build_prompt;
use crate::seeds::{choose_seed, load_seeds};
use crate::store::save_case;
use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    NoSeeds,
    Unparsed { path: PathBuf },
    Judged { path: PathBuf, verdict: Verdict },
}

pub struct CaseSession {
    config: Config,
    ollama: CaseClient,
    journal: Option<CaseJournal>,
}

impl CaseSession {
    pub fn new(config: Config) -> Result<Self> {
        let ollama = CaseClient::new(&config.ollama_endpoint, &config.ollama_model)?;
        let journal = match &config.journal_path {
            Some(path) => Some(CaseJournal::new(path).map_err(|e| CaseError::io(path, e))?),
            None => None,
        };

        Ok(Self {
            config,
            ollama,
            journal,
        })
    }

    /// Plays one case: seed, generate, save, show, judge.
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Outcome> {
        let seeds = match load_seeds(&self.config.seeds_path) {
            Ok(seeds) => seeds,
            Err(CaseError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!("Seed file {} does not exist", self.config.seeds_path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        let Some(seed) = choose_seed(&seeds) else {
            emit(output, "No seeds found.")?;
            return Ok(Outcome::NoSeeds);
        };

        let (prompt, case_id) = build_prompt(seed);
        let markdown = match self.ollama.generate(&prompt).await {
            Ok(markdown) => markdown,
            Err(e) => {
                error!("Inference server unavailable: {}", e);
                self.with_journal(|j| j.log_error(&e.to_string()));
                return Err(e);
            }
        };
        self.with_journal(|j| j.log_generated(case_id.as_str(), self.ollama.model()));

        let path = save_case(&markdown, &self.config.outdir, &case_id)?;
        self.with_journal(|j| j.log_saved(&path));
        emit(output, format!("\nSaved case → {}", path.display()))?;

        let parsed = parse_case(&markdown);
        match self.config.show {
            ShowMode::Brief => emit(output, render_brief(&parsed))?,
            ShowMode::Full => emit(output, format!("\n{}", markdown))?,
        }

        let culprit = parsed
            .solution
            .as_ref()
            .map(|s| s.culprit.as_str())
            .unwrap_or_default();
        let Some(judge) = Judge::new(&parsed.suspects, culprit) else {
            warn!("Case {} is missing suspects or a solution marker", case_id);
            self.with_journal(|j| j.log_unparsed(case_id.as_str()));
            emit(output, "Could not parse suspects or solution. Open the file to read manually.")?;
            return Ok(Outcome::Unparsed { path });
        };

        let verdict = judge.ask(input, output)?;
        emit(output, "")?;
        match &verdict {
            Verdict::Correct { picked } => {
                info!("Case {}: {} was correct", case_id, picked);
                emit(output, "✅ Correct. You followed the evidence.")?;
            }
            Verdict::Incorrect { picked, culprit } => {
                info!("Case {}: {} was wrong", case_id, picked);
                emit(
                    output,
                    format!("❌ Not quite. You chose {}; the culprit was {}.", picked, culprit),
                )?;
            }
        }
        let picked = match &verdict {
            Verdict::Correct { picked } | Verdict::Incorrect { picked, .. } => picked,
        };
        self.with_journal(|j| j.log_verdict(case_id.as_str(), picked, verdict.is_correct()));

        if self.config.reveal {
            if let Some(solution) = &parsed.solution {
                emit(output, format!("\nReasoning: {}", solution.rationale))?;
            }
        }

        emit(
            output,
            format!(
                "\nPlay again: `coldcase --model {} --show brief`",
                self.ollama.model()
            ),
        )?;

        Ok(Outcome::Judged { path, verdict })
    }

    fn with_journal(&self, f: impl FnOnce(&CaseJournal)) {
        if let Some(journal) = &self.journal {
            f(journal);
        }
    }
}

/// Title, victim and lettered suspects for the brief display.
pub fn render_brief(parsed: &ParsedCase) -> String {
    let mut out = format!("\n{}\n", parsed.title.as_deref().unwrap_or("Untitled"));
    if let Some(victim) = &parsed.victim {
        out.push_str(victim);
        out.push('\n');
    }

    if parsed.suspects.is_empty() {
        out.push_str("\n(Suspects not found; model output might be malformed.)\n");
    } else {
        out.push_str("\nSuspects:\n");
        for (letter, name) in LETTERS.iter().zip(&parsed.suspects) {
            out.push_str(&format!("  {}. {}\n", letter, name));
        }
    }

    out.push_str("\n(See full case in the saved Markdown.)\n");
    out
}

fn emit<W: Write>(output: &mut W, text: impl Display) -> Result<()> {
    writeln!(output, "{}", text).map_err(CaseError::Console)
}
