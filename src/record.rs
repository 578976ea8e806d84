use std::fs;
use std::path::PathBuf;

/// The persisted best score: a single integer stored under one fixed slot.
///
/// The slot is a plain text file holding the number. A missing or
/// unreadable slot reads as zero, and a failed write never interrupts play;
/// losing the record is an annoyance, not an error. Construct with
/// [`Record::open`] to bind the record to a file, or [`Record::in_memory`]
/// for a throwaway slot (tests, simulations).
#[derive(Clone, Debug)]
pub struct Record {
    path: Option<PathBuf>,
    best: u32,
}

impl Record {
    /// A record that lives only for this process.
    pub fn in_memory() -> Self {
        Record {
            path: None,
            best: 0,
        }
    }

    /// Loads the record stored at `path`. A missing or unparsable file
    /// reads as zero.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = fs::read_to_string(&path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0);
        Record {
            path: Some(path),
            best,
        }
    }

    /// The best score seen so far.
    pub fn best(&self) -> u32 {
        self.best
    }

    /// Raises the record to `score` when it is higher, persisting the new
    /// value to the slot. Lower scores leave the record untouched.
    pub(crate) fn submit(&mut self, score: u32) {
        if score <= self.best {
            return;
        }
        self.best = score;
        if let Some(path) = &self.path {
            // Best effort: a full disk or read-only slot must not abort
            // the game pipeline that triggered the write.
            let _ = fs::write(path, self.best.to_string());
        }
    }
}
