use serde::{Deserialize, Serialize};

use crate::model::field::Field;

/// One section of the assessment wizard.
///
/// Sections are visited in declaration order; the wizard never skips or
/// reorders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    MetalInformation,
    MiningExtraction,
    ProcessingEnergy,
    TransportSupplyChain,
    UsePhase,
    EndOfLife,
    ImpactMetrics,
}

impl Step {
    pub const ALL: [Self; 7] = [
        Self::MetalInformation,
        Self::MiningExtraction,
        Self::ProcessingEnergy,
        Self::TransportSupplyChain,
        Self::UsePhase,
        Self::EndOfLife,
        Self::ImpactMetrics,
    ];

    /// Number of sections.
    pub const COUNT: usize = Self::ALL.len();

    /// 1-based position of the step.
    #[must_use]
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::MetalInformation => "Metal Information",
            Self::MiningExtraction => "Mining & Ore Extraction",
            Self::ProcessingEnergy => "Processing & Energy",
            Self::TransportSupplyChain => "Transport & Supply Chain",
            Self::UsePhase => "Use Phase (if applicable)",
            Self::EndOfLife => "End-of-Life / Circularity",
            Self::ImpactMetrics => "Impact Metrics",
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::MetalInformation)
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::ImpactMetrics)
    }

    /// Fields collected on this step, in display order.
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| f.step() == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_one_based() {
        assert_eq!(Step::MetalInformation.number(), 1);
        assert_eq!(Step::ImpactMetrics.number(), 7);
        assert_eq!(Step::COUNT, 7);
    }

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(1), Some(Step::MetalInformation));
        assert_eq!(Step::from_number(7), Some(Step::ImpactMetrics));
        assert_eq!(Step::from_number(8), None);
    }

    #[test]
    fn test_next_and_prev_stop_at_ends() {
        assert_eq!(Step::ImpactMetrics.next(), None);
        assert_eq!(Step::MetalInformation.prev(), None);
        assert_eq!(Step::UsePhase.next(), Some(Step::EndOfLife));
        assert_eq!(Step::UsePhase.prev(), Some(Step::TransportSupplyChain));
    }

    #[test]
    fn test_every_step_has_fields() {
        for step in Step::ALL {
            assert!(step.fields().count() > 0, "{:?} has no fields", step);
        }
        assert_eq!(Step::UsePhase.fields().collect::<Vec<_>>(), vec![Field::ProductLifetime]);
    }
}
