//! The report list that receives finished wizards.

use log::info;

use crate::model::{FormRecord, Report, ReportId};
use crate::wizard::WizardListener;

/// In-memory list of generated reports.
#[derive(Debug, Default)]
pub struct Dashboard {
    reports: Vec<Report>,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in creation order.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// "1 report generated", "3 reports generated".
    #[must_use]
    pub fn summary(&self) -> String {
        let n = self.reports.len();
        format!("{} report{} generated", n, if n == 1 { "" } else { "s" })
    }

    /// Look up a report for viewing. Viewing is recorded in the log only.
    pub fn view(&self, id: ReportId) -> Option<&Report> {
        let report = self.reports.iter().find(|r| r.id == id);
        if report.is_some() {
            info!("Viewing report: {}", id);
        }
        report
    }
}

impl WizardListener for Dashboard {
    fn on_complete(&mut self, record: FormRecord) {
        let report = Report::from_record(&record);
        info!("generated {} ({})", report.name, report.id);
        self.reports.push(report);
    }

    fn on_cancel(&mut self) {
        info!("assessment discarded, {}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::wizard::Wizard;

    #[test]
    fn test_summary_pluralization() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.summary(), "0 reports generated");
        dashboard.on_complete(FormRecord::new());
        assert_eq!(dashboard.summary(), "1 report generated");
        dashboard.on_complete(FormRecord::new());
        assert_eq!(dashboard.summary(), "2 reports generated");
    }

    #[test]
    fn test_completed_wizard_becomes_report() {
        let mut dashboard = Dashboard::new();
        let mut wizard = Wizard::new();
        wizard.set_field(Field::MetalType, "aluminum").unwrap();
        wizard.set_field(Field::GlobalWarmingPotential, "8.1").unwrap();
        wizard.finish(&mut dashboard);

        assert_eq!(dashboard.len(), 1);
        let report = &dashboard.reports()[0];
        assert_eq!(report.name, "aluminum LCA Report");
        assert_eq!(report.co2_impact, "8.1 kg CO\u{2082}-eq");
    }

    #[test]
    fn test_cancelled_wizard_adds_nothing() {
        let mut dashboard = Dashboard::new();
        Wizard::new().abandon(&mut dashboard);
        assert!(dashboard.is_empty());
    }

    #[test]
    fn test_view_finds_by_id() {
        let mut dashboard = Dashboard::new();
        dashboard.on_complete(FormRecord::new());
        let id = dashboard.reports()[0].id;

        assert_eq!(dashboard.view(id).map(|r| r.id), Some(id));
        assert!(dashboard.view(ReportId::new()).is_none());
    }

    #[test]
    fn test_reports_keep_creation_order() {
        let mut dashboard = Dashboard::new();
        for metal in ["iron", "steel"] {
            let mut wizard = Wizard::new();
            wizard.set_field(Field::MetalType, metal).unwrap();
            wizard.finish(&mut dashboard);
        }
        let names: Vec<&str> = dashboard.reports().iter().map(|r| r.metal_type.as_str()).collect();
        assert_eq!(names, vec!["iron", "steel"]);
    }
}
