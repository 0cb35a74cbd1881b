use crate::error::{CaseError, Result};
use crate::models::Verdict;
use std::io::{BufRead, Write};

pub const LETTERS: [char; 3] = ['A', 'B', 'C'];

pub struct Judge<'a> {
    suspects: &'a [String],
    culprit: &'a str,
}

impl<'a> Judge<'a> {
    /// Returns `None` when there is nothing to judge.
    pub fn new(suspects: &'a [String], culprit: &'a str) -> Option<Self> {
        if suspects.is_empty() || culprit.trim().is_empty() {
            return None;
        }
        Some(Self {
            suspects: &suspects[..suspects.len().min(LETTERS.len())],
            culprit,
        })
    }

    pub fn letters(&self) -> &[char] {
        &LETTERS[..self.suspects.len()]
    }

    /// Index of the suspect behind `answer`, if it names one.
    pub fn pick(&self, answer: &str) -> Option<usize> {
        let mut chars = answer.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() {
            return None;
        }
        self.letters().iter().position(|&l| l == letter)
    }

    pub fn verdict(&self, index: usize) -> Verdict {
        let picked = self.suspects[index].clone();
        if picked.to_lowercase() == self.culprit.to_lowercase() {
            Verdict::Correct { picked }
        } else {
            Verdict::Incorrect {
                picked,
                culprit: self.culprit.to_string(),
            }
        }
    }

    /// Prompts until a valid letter is read.
    pub fn ask<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Verdict> {
        let choices = self
            .letters()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join("/");

        loop {
            write!(output, "Who did it? ({}): ", choices).map_err(CaseError::Console)?;
            output.flush().map_err(CaseError::Console)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(CaseError::Console)? == 0 {
                return Err(CaseError::InputClosed);
            }

            match self.pick(&line) {
                Some(index) => return Ok(self.verdict(index)),
                None => writeln!(output, "Choose a valid letter.").map_err(CaseError::Console)?,
            }
        }
    }
}
