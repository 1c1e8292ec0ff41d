//! Upload staging list.
//!
//! DESIGN
//! ======
//! Files picked or dropped by the user are validated by MIME type and staged
//! locally. Nothing is transferred: a staged record sits in `Uploading` until
//! the owning component's delay timer fires, then flips to `Success`.
//! Rejected files never create a record.
//!
//! The `Error` status is reserved for rendering; no transition produces it.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// MIME types accepted by the staging list.
pub const ALLOWED_MIME_TYPES: [&str; 4] = [
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Value for the file input's `accept` attribute.
pub const ACCEPT_EXTENSIONS: &str = ".pdf,.txt,.doc,.docx";

/// Simulated upload latency before a staged file is marked successful.
pub const UPLOAD_DELAY_MS: u64 = 2000;

/// Advertised per-file size cap. Shown to users, not enforced.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Fixed id of the built-in sample report record.
pub const SAMPLE_REPORT_ID: &str = "sample-report";
pub const SAMPLE_REPORT_NAME: &str = "Michael_Johnson_Medical_Report.txt";
pub const SAMPLE_REPORT_SIZE: u64 = 4_812;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// User-facing failures of the staging list. The display text is what the
/// alert shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("File type {mime} is not supported. Please upload PDF, TXT, or DOC files.")]
    UnsupportedType { mime: String },
    #[error("Please upload at least one medical report before starting analysis.")]
    NothingReady,
}

// =============================================================================
// RECORDS
// =============================================================================

/// Lifecycle of a staged file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FileStatus {
    #[default]
    Uploading,
    Success,
    Error,
}

/// File metadata as reported by the browser, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self { name: name.into(), size, mime_type: mime_type.into() }
    }
}

/// One entry in the staging list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub status: FileStatus,
}

/// Result of staging a batch: ids that entered the list and the errors for
/// files that were turned away.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageReport {
    pub staged: Vec<String>,
    pub rejected: Vec<UploadError>,
}

// =============================================================================
// UPLOAD STATE
// =============================================================================

/// Staging list plus the drop-zone hover flag.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub files: Vec<UploadedFile>,
    pub is_drag_over: bool,
}

impl UploadState {
    /// Validate and stage one file under a fresh random id.
    pub fn stage(&mut self, candidate: FileCandidate) -> Result<String, UploadError> {
        self.stage_with_id(candidate, uuid::Uuid::new_v4().simple().to_string())
    }

    fn stage_with_id(&mut self, candidate: FileCandidate, id: String) -> Result<String, UploadError> {
        if !is_supported_type(&candidate.mime_type) {
            return Err(UploadError::UnsupportedType { mime: candidate.mime_type });
        }
        self.files.push(UploadedFile {
            id: id.clone(),
            name: candidate.name,
            size: candidate.size,
            mime_type: candidate.mime_type,
            status: FileStatus::Uploading,
        });
        Ok(id)
    }

    /// Stage every file of a batch independently.
    pub fn stage_all<I>(&mut self, candidates: I) -> StageReport
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        let mut report = StageReport::default();
        for candidate in candidates {
            match self.stage(candidate) {
                Ok(id) => report.staged.push(id),
                Err(e) => report.rejected.push(e),
            }
        }
        report
    }

    /// Flip a staged file from `Uploading` to `Success`.
    ///
    /// Returns `false` when the id is gone (removed before the delay elapsed)
    /// or the file already left `Uploading`.
    pub fn mark_uploaded(&mut self, id: &str) -> bool {
        match self.files.iter_mut().find(|f| f.id == id) {
            Some(file) if file.status == FileStatus::Uploading => {
                file.status = FileStatus::Success;
                true
            }
            _ => false,
        }
    }

    /// Drop a file from the list. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    /// Insert the built-in sample report, replacing a previous copy.
    /// The record is ready immediately.
    pub fn load_sample_report(&mut self) {
        let sample = UploadedFile {
            id: SAMPLE_REPORT_ID.to_owned(),
            name: SAMPLE_REPORT_NAME.to_owned(),
            size: SAMPLE_REPORT_SIZE,
            mime_type: "text/plain".to_owned(),
            status: FileStatus::Success,
        };
        match self.files.iter_mut().find(|f| f.id == SAMPLE_REPORT_ID) {
            Some(existing) => *existing = sample,
            None => self.files.push(sample),
        }
    }

    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.files.iter().filter(|f| f.status == FileStatus::Success).count()
    }

    #[must_use]
    pub fn has_ready_files(&self) -> bool {
        self.ready_count() > 0
    }

    /// Gate for "Start AI Analysis": at least one file must be ready.
    pub fn begin_analysis(&self) -> Result<usize, UploadError> {
        match self.ready_count() {
            0 => Err(UploadError::NothingReady),
            n => Ok(n),
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

#[must_use]
pub fn is_supported_type(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime)
}

/// Human-readable size: base 1024, at most two decimals, trailing zeros trimmed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Drop-zone footnote listing accepted formats and the advertised size cap.
#[must_use]
pub fn supported_formats_note() -> String {
    let cap = format_file_size(MAX_FILE_SIZE_BYTES).replace(' ', "");
    format!("Supported formats: PDF, TXT, DOC, DOCX (Max {cap} each)")
}
