use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use dailyclaim_domain::notification::RunCounter;
use dailyclaim_domain::shared::DomainError;

/// Run counter kept as a decimal number in a text file
#[derive(Debug, Clone)]
pub struct FileRunCounter {
    path: PathBuf,
}

impl FileRunCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current value; a missing file counts as zero
    pub fn current(&self) -> Result<u64, DomainError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(0),
            Ok(text) => text.trim().parse::<u64>().map_err(|e| {
                DomainError::Counter(format!(
                    "{} does not hold a number: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(DomainError::Counter(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl RunCounter for FileRunCounter {
    fn next(&self) -> Result<u64, DomainError> {
        let next = self.current()?.checked_add(1).ok_or_else(|| {
            DomainError::Counter(format!("{} is at its maximum value", self.path.display()))
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::Counter(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        // Write to a sibling file first so a crash never leaves a truncated counter
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, next.to_string())
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                DomainError::Counter(format!("Failed to write {}: {}", self.path.display(), e))
            })?;

        Ok(next)
    }
}
