use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::field::Field;
use crate::model::ids::ReportId;
use crate::model::record::FormRecord;

/// Whether a report came from a finished wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
    Draft,
}

impl ReportStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Draft => "draft",
        }
    }
}

/// Summary card for one completed assessment.
///
/// Nothing is computed: the headline impact is the Global Warming Potential
/// exactly as it was entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub name: String,
    pub metal_type: String,
    pub status: ReportStatus,
    pub co2_impact: String,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Derive a completed report from a finished record.
    ///
    /// Values are trimmed first, so a whitespace-only metal or GWP counts as
    /// unfilled and takes its fallback, matching [`FormRecord::is_filled`].
    #[must_use]
    pub fn from_record(record: &FormRecord) -> Self {
        let metal = record.get(Field::MetalType).trim();
        let gwp = record.get(Field::GlobalWarmingPotential).trim();

        Self {
            id: ReportId::new(),
            name: format!(
                "{} LCA Report",
                if metal.is_empty() { "Metal" } else { metal }
            ),
            metal_type: if metal.is_empty() {
                "Unknown".to_string()
            } else {
                metal.to_string()
            },
            status: ReportStatus::Completed,
            co2_impact: if gwp.is_empty() {
                "TBD".to_string()
            } else {
                format!("{} kg CO\u{2082}-eq", gwp)
            },
            created_at: Utc::now(),
        }
    }

    /// Creation date rendered with a `strftime` pattern.
    #[must_use]
    pub fn created_label(&self, format: &str) -> String {
        self.created_at.format(format).to_string()
    }
}
