//! End-to-end behaviour of the assessment wizard and its dashboard caller.

use oresense_core::dashboard::Dashboard;
use oresense_core::model::{Field, FormRecord, Step};
use oresense_core::wizard::{Wizard, WizardListener, TOTAL_STEPS};

/// Listener that remembers every callback it received.
#[derive(Default)]
struct Outcomes {
    records: Vec<FormRecord>,
    cancels: usize,
}

impl WizardListener for Outcomes {
    fn on_complete(&mut self, record: FormRecord) {
        self.records.push(record);
    }

    fn on_cancel(&mut self) {
        self.cancels += 1;
    }
}

/// Start fresh, set the metal, walk to the end, enter the GWP, complete.
#[test]
fn test_copper_assessment_scenario() {
    let mut wizard = Wizard::new();
    assert_eq!(wizard.current_step(), 1);
    assert!(wizard.record().is_empty());

    wizard.set_field(Field::MetalType, "copper").unwrap();
    for _ in 0..6 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step(), 7);

    wizard
        .set_field(Field::GlobalWarmingPotential, "12.45")
        .unwrap();
    let record = wizard.complete();

    assert_eq!(record.get(Field::MetalType), "copper");
    assert_eq!(record.get(Field::GlobalWarmingPotential), "12.45");
    let others: Vec<(Field, &str)> = record
        .iter()
        .filter(|(f, _)| !matches!(f, Field::MetalType | Field::GlobalWarmingPotential))
        .collect();
    assert_eq!(others.len(), Field::COUNT - 2);
    assert!(others.iter().all(|(_, v)| v.is_empty()));
}

/// Retreat on step 1 is a no-op and cancelling produces no record.
#[test]
fn test_cancel_scenario() {
    let mut outcomes = Outcomes::default();
    let mut wizard = Wizard::new();

    wizard.retreat();
    assert_eq!(wizard.current_step(), 1);

    wizard.abandon(&mut outcomes);
    assert!(outcomes.records.is_empty());
    assert_eq!(outcomes.cancels, 1);
}

/// The record reflects the last write to each touched field.
#[test]
fn test_last_write_wins() {
    let writes = [
        (Field::MiningLocation, "Chile"),
        (Field::OreGrade, "0.8"),
        (Field::MiningLocation, "Peru"),
        (Field::TransportMode, "ship"),
        (Field::OreGrade, "1.1"),
        (Field::Packaging, "crates"),
        (Field::Packaging, ""),
        (Field::OreGrade, " 2.5 "),
        (Field::TransportMode, "rail "),
        (Field::RecyclingRate, "\t40"),
    ];

    let mut wizard = Wizard::new();
    for (field, value) in writes {
        wizard.set_field(field, value).unwrap();
    }

    let record = wizard.complete();
    for field in Field::ALL {
        let expected = writes
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map_or("", |(_, v)| *v);
        assert_eq!(record.get(field), expected, "{}", field);
    }
}

/// No interleaving of advance/retreat leaves the step range.
#[test]
fn test_navigation_stays_in_bounds() {
    // Deterministic pseudo-random walk.
    let mut state: u32 = 0x2545_f491;
    let mut wizard = Wizard::new();

    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        if state % 3 == 0 {
            wizard.retreat();
        } else {
            wizard.advance();
        }
        let step = wizard.current_step();
        assert!((1..=TOTAL_STEPS).contains(&step), "step {} out of range", step);
        assert_eq!(Step::from_number(step), Some(wizard.step()));
    }
}

#[test]
fn test_advance_from_first_step_saturates() {
    for extra in 0..4 {
        let mut wizard = Wizard::new();
        for _ in 0..(TOTAL_STEPS - 1 + extra) {
            wizard.advance();
        }
        assert_eq!(wizard.current_step(), TOTAL_STEPS);
        assert!(wizard.is_final_step());
    }
}

#[test]
fn test_navigation_preserves_entered_values() {
    let mut wizard = Wizard::new();
    wizard.set_field(Field::MetalType, "steel").unwrap();
    wizard.advance();
    wizard.advance();
    wizard.set_field(Field::EnergySource, "coal").unwrap();
    wizard.retreat();
    wizard.retreat();

    assert_eq!(wizard.field(Field::MetalType), "steel");
    assert_eq!(wizard.field(Field::EnergySource), "coal");
}

/// Every catalog field survives completion under its own name.
#[test]
fn test_complete_drops_no_field() {
    let mut wizard = Wizard::new();
    for field in Field::ALL {
        let value = match field.kind() {
            oresense_core::model::FieldKind::Choice(set) => set.options()[0].value.to_string(),
            kind if kind.is_numeric() => "1".to_string(),
            _ => format!("text for {}", field),
        };
        wizard.set_field(field, &value).unwrap();
    }

    let record = wizard.complete();
    assert_eq!(record.filled_count(), Field::COUNT);

    let json = serde_json::to_value(&record).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), Field::COUNT);
    for field in Field::ALL {
        assert_eq!(object[field.name()], record.get(field));
    }
}

#[test]
fn test_dashboard_collects_finished_wizards() {
    let mut dashboard = Dashboard::new();

    let mut wizard = Wizard::new();
    wizard.set_field(Field::MetalType, "copper").unwrap();
    wizard
        .set_field(Field::GlobalWarmingPotential, "12.45")
        .unwrap();
    wizard.finish(&mut dashboard);

    Wizard::new().abandon(&mut dashboard);
    Wizard::new().finish(&mut dashboard);

    assert_eq!(dashboard.summary(), "2 reports generated");
    let reports = dashboard.reports();
    assert_eq!(reports[0].name, "copper LCA Report");
    assert_eq!(reports[0].co2_impact, "12.45 kg CO\u{2082}-eq");
    assert_eq!(reports[1].metal_type, "Unknown");
    assert_eq!(reports[1].co2_impact, "TBD");
}
