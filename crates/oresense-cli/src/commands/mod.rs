pub mod config;
pub mod fields;
pub mod run;

pub use fields::list_fields;
pub use run::run_dashboard;
