use anyhow::Result;
use oresense_core::model::{catalog, catalog_json, FieldKind};

fn describe(kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Number => "number >= 0".to_string(),
        FieldKind::SignedNumber => "number".to_string(),
        FieldKind::Percent => "percent 0-100".to_string(),
        FieldKind::Choice(set) => {
            let values: Vec<&str> = set.options().iter().map(|o| o.value).collect();
            format!("one of {}", values.join("|"))
        }
    }
}

/// Print the field catalog grouped by wizard step.
pub fn list_fields(json: bool) -> Result<()> {
    if json {
        println!("{}", catalog_json()?);
        return Ok(());
    }

    for section in catalog() {
        println!("\nStep {}: {}", section.number, section.title);
        for spec in section.fields {
            let unit = spec.unit.map(|u| format!(" [{}]", u)).unwrap_or_default();
            println!(
                "  {:<28} {}{}",
                spec.field.name(),
                describe(spec.kind),
                unit
            );
            println!("  {:<28} {}", "", spec.label);
        }
    }

    Ok(())
}
