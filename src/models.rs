use serde::{Deserialize, Serialize};

// Ollama Models
#[derive(Serialize, Debug)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerateOptions,
    pub stream: bool,
}

/// Sampling options sent with every generation request.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub top_p: f32,
    pub num_ctx: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_p: 0.95,
            num_ctx: 4096,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct GenerateResponse {
    #[serde(default)]
    pub response: String,
}

// Case Models
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub culprit: String,
    pub rationale: String,
}

/// Everything the extractor could recover from one generated case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCase {
    pub title: Option<String>,
    pub victim: Option<String>,
    pub suspects: Vec<String>,
    pub solution: Option<Solution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct { picked: String },
    Incorrect { picked: String, culprit: String },
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }
}
