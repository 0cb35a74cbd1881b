use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;

/// Append-only journal of what happened to each case.
pub struct CaseJournal {
    file: Mutex<std::fs::File>,
}

impl CaseJournal {
    pub fn new(path: &Path) -> Result<Self, std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    pub fn log(&self, action: &str, details: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] [{}] {}\n", timestamp, action, details);
        debug!("journal: {}", line.trim_end());

        if let Ok(mut file) = self.file.lock() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }

    pub fn log_generated(&self, case_id: &str, model: &str) {
        self.log("GENERATED", &format!("case {} by {}", case_id, model));
    }

    pub fn log_saved(&self, path: &Path) {
        self.log("SAVED", &path.display().to_string());
    }

    pub fn log_unparsed(&self, case_id: &str) {
        self.log("UNPARSED", &format!("case {}: suspects or solution missing", case_id));
    }

    pub fn log_verdict(&self, case_id: &str, picked: &str, correct: bool) {
        let result = if correct { "correct" } else { "wrong" };
        self.log("VERDICT", &format!("case {}: picked '{}' ({})", case_id, picked, result));
    }

    pub fn log_error(&self, error: &str) {
        self.log("ERROR", error);
    }
}
