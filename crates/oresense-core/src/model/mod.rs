pub mod field;
pub mod ids;
pub mod record;
pub mod report;
pub mod step;

pub use field::{catalog, catalog_json, CatalogSection, Field, FieldKind, FieldSpec, FIELD_SPECS};
pub use ids::ReportId;
pub use record::FormRecord;
pub use report::{Report, ReportStatus};
pub use step::Step;
