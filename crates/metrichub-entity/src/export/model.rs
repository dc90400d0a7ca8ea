//! Export record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use metrichub_core::types::id::ExportId;

use super::kind::ExportKind;
use super::status::ExportStatus;

/// A report export request and its simulated lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Unique export identifier.
    pub id: ExportId,
    /// File format.
    pub kind: ExportKind,
    /// Generated file name.
    pub file_name: String,
    /// Human-readable size label.
    pub size_label: String,
    /// When the export was requested.
    pub requested_at: DateTime<Utc>,
    /// Current status.
    pub status: ExportStatus,
}

impl ExportRecord {
    /// Create a new export record in the processing state, stamped at
    /// `requested_at`.
    pub fn processing(kind: ExportKind, requested_at: DateTime<Utc>) -> Self {
        Self {
            id: ExportId::new(),
            kind,
            file_name: file_name_for(kind, requested_at),
            size_label: kind.simulated_size_label().to_string(),
            requested_at,
            status: ExportStatus::Processing,
        }
    }

    /// Create a completed seed record with an explicit name and size.
    pub fn seeded_completed(
        kind: ExportKind,
        file_name: impl Into<String>,
        size_label: impl Into<String>,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ExportId::new(),
            kind,
            file_name: file_name.into(),
            size_label: size_label.into(),
            requested_at,
            status: ExportStatus::Completed,
        }
    }

    /// Transition the record to the completed state.
    pub fn complete(&mut self) {
        self.status = ExportStatus::Completed;
    }
}

/// Synthesize the display file name for an export requested at `date`,
/// e.g. `PDF_Report_08_08_2026.pdf`.
pub fn file_name_for(kind: ExportKind, date: DateTime<Utc>) -> String {
    format!(
        "{}_Report_{}.{}",
        kind.as_str().to_uppercase(),
        date.format("%m_%d_%Y"),
        kind.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_name_template() {
        let date = Utc.with_ymd_and_hms(2024, 8, 9, 12, 0, 0).single().expect("valid");
        assert_eq!(
            file_name_for(ExportKind::Pdf, date),
            "PDF_Report_08_09_2024.pdf"
        );
        assert_eq!(
            file_name_for(ExportKind::Csv, date),
            "CSV_Report_08_09_2024.csv"
        );
    }

    #[test]
    fn test_processing_then_complete() {
        let mut record = ExportRecord::processing(ExportKind::Csv, Utc::now());
        assert_eq!(record.status, ExportStatus::Processing);
        assert_eq!(record.size_label, "1.5 MB");
        record.complete();
        assert_eq!(record.status, ExportStatus::Completed);
        assert!(record.status.is_terminal());
    }
}
