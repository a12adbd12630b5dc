//! Core model for oresense.
//!
//! This crate defines the assessment field catalog, the closed vocabularies
//! for enumerated inputs, the step-form [`Wizard`](wizard::Wizard) that
//! collects a [`FormRecord`](model::FormRecord), and the
//! [`Dashboard`](dashboard::Dashboard) that turns finished records into
//! reports.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod taxonomy;
pub mod validation;
pub mod wizard;

pub use config::Config;
pub use error::{Error, Result};
