//! The step-form controller behind the assessment wizard.
//!
//! A [`Wizard`] owns the record being filled in and the current step. Field
//! edits and navigation mutate it in place; [`Wizard::complete`] and
//! [`Wizard::cancel`] consume it, so a finished wizard cannot be resumed.
//!
//! # Example
//!
//! ```
//! use oresense_core::model::Field;
//! use oresense_core::wizard::{Wizard, TOTAL_STEPS};
//!
//! let mut wizard = Wizard::new();
//! wizard.set_field(Field::MetalType, "copper").unwrap();
//! for _ in 1..TOTAL_STEPS {
//!     wizard.advance();
//! }
//! assert!(wizard.is_final_step());
//! let record = wizard.complete();
//! assert_eq!(record.get(Field::MetalType), "copper");
//! ```

use log::{debug, info, warn};

use crate::error::Result;
use crate::model::{Field, FormRecord, Step};
use crate::validation::{self, Validation};

/// Number of wizard sections.
pub const TOTAL_STEPS: usize = Step::COUNT;

/// Behaviour switches for a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardOptions {
    pub validation: Validation,
    /// Refuse to leave a step while any of its fields is empty.
    pub require_complete_steps: bool,
}

/// Receives the outcome of a wizard session.
///
/// Exactly one of the two methods is called, exactly once.
pub trait WizardListener {
    fn on_complete(&mut self, record: FormRecord);

    fn on_cancel(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    record: FormRecord,
    step: Step,
    options: WizardOptions,
}

impl Wizard {
    /// A fresh wizard on step 1 with an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(WizardOptions::default())
    }

    #[must_use]
    pub fn with_options(options: WizardOptions) -> Self {
        Self {
            record: FormRecord::new(),
            step: Step::MetalInformation,
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> WizardOptions {
        self.options
    }

    #[must_use]
    pub const fn record(&self) -> &FormRecord {
        &self.record
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        self.record.get(field)
    }

    /// Overwrite one field. On error the record is left untouched.
    pub fn set_field(&mut self, field: Field, value: impl AsRef<str>) -> Result<()> {
        let value = value.as_ref();
        validation::check(field, value, self.options.validation)?;
        debug!("set {} = {:?}", field, value);
        self.record.set(field, value.to_string());
        Ok(())
    }

    /// Like [`set_field`](Self::set_field), addressing the field by wire name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl AsRef<str>) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value)
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// 1-based index of the current step.
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.step.number()
    }

    #[must_use]
    pub const fn is_first_step(&self) -> bool {
        self.step.is_first()
    }

    #[must_use]
    pub const fn is_final_step(&self) -> bool {
        self.step.is_last()
    }

    /// Fraction of the wizard reached, `current_step / TOTAL_STEPS`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.current_step() as f64 / TOTAL_STEPS as f64
    }

    /// Empty fields on the current step.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        self.step
            .fields()
            .filter(|f| !self.record.is_filled(*f))
            .collect()
    }

    /// Whether [`advance`](Self::advance) would move.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_final_step()
            && (!self.options.require_complete_steps || self.missing_fields().is_empty())
    }

    /// Move to the next step. Saturates on the last step.
    pub fn advance(&mut self) {
        if self.options.require_complete_steps && !self.missing_fields().is_empty() {
            debug!(
                "step {} incomplete, staying: {:?}",
                self.current_step(),
                self.missing_fields()
            );
            return;
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    /// Move to the previous step. Saturates on the first step.
    pub fn retreat(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// Finish the session and hand back the record.
    ///
    /// Callers are expected to offer completion only on the final step.
    #[must_use]
    pub fn complete(self) -> FormRecord {
        if !self.is_final_step() {
            warn!(
                "completing wizard from step {} of {}",
                self.current_step(),
                TOTAL_STEPS
            );
        }
        info!(
            "assessment completed with {} of {} fields filled",
            self.record.filled_count(),
            Field::COUNT
        );
        self.record
    }

    /// Abandon the session; the record is dropped.
    pub fn cancel(self) {
        info!("assessment cancelled on step {}", self.current_step());
    }

    /// [`complete`](Self::complete) and deliver the record to `listener`.
    pub fn finish<L: WizardListener + ?Sized>(self, listener: &mut L) {
        listener.on_complete(self.complete());
    }

    /// [`cancel`](Self::cancel) and notify `listener`.
    pub fn abandon<L: WizardListener + ?Sized>(self, listener: &mut L) {
        self.cancel();
        listener.on_cancel();
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
