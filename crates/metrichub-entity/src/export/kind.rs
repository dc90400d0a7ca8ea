//! Export file kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use metrichub_core::AppError;

/// The file format of a requested report export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// Formatted PDF report.
    Pdf,
    /// Raw CSV data.
    Csv,
}

impl ExportKind {
    /// Return the kind as a lowercase string (also the file extension).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }

    /// The size label shown for a freshly simulated export of this kind.
    pub fn simulated_size_label(&self) -> &'static str {
        match self {
            Self::Pdf => "2.1 MB",
            Self::Csv => "1.5 MB",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            other => Err(AppError::validation(format!(
                "Unknown export kind '{other}' (expected pdf|csv)"
            ))),
        }
    }
}
