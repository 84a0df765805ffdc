use std::path::PathBuf;

/// Results sent from the export thread back to the UI thread.
pub enum WorkerResult {
    /// The crop was written to `path`.
    Saved { path: PathBuf },
    /// The save picker was dismissed; nothing was written.
    SaveCancelled,
    Error { message: String },
}
