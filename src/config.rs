use crate::ollama::DEFAULT_ENDPOINT;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShowMode {
    Brief,
    Full,
}

#[derive(Parser, Debug)]
#[command(
    name = "coldcase",
    version,
    about = "Gen Cold Case Lab: LLM mystery (Ollama)"
)]
pub struct Cli {
    #[arg(long, default_value = "data/seeds.jsonl", help = "Newline-delimited JSON seed file")]
    pub seeds: PathBuf,
    #[arg(long, default_value = "gemma:4b", help = "Model name on the inference server")]
    pub model: String,
    #[arg(long, value_enum, default_value_t = ShowMode::Brief)]
    pub show: ShowMode,
    #[arg(long, default_value_t = false, help = "Print the culprit's rationale after judging")]
    pub reveal: bool,
    #[arg(long, default_value = "cases", help = "Directory for saved cases")]
    pub outdir: PathBuf,
    #[arg(long, default_value = DEFAULT_ENDPOINT, help = "Inference server base URL")]
    pub endpoint: String,
    #[arg(long, help = "Append a timestamped action journal to this file")]
    pub journal: Option<PathBuf>,
}

pub struct Config {
    pub seeds_path: PathBuf,
    pub ollama_endpoint: String,
    pub ollama_model: String,
    pub show: ShowMode,
    pub reveal: bool,
    pub outdir: PathBuf,
    pub journal_path: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            seeds_path: cli.seeds,
            ollama_endpoint: cli.endpoint,
            ollama_model: cli.model,
            show: cli.show,
            reveal: cli.reveal,
            outdir: cli.outdir,
            journal_path: cli.journal,
        }
    }
}
