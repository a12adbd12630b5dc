//! Closed vocabularies for the enumerated assessment inputs.
//!
//! Every choice set is a plain enum with a stable wire value (what the
//! record stores) and a human label (what the UI shows).

use serde::{Deserialize, Serialize};

/// A closed set of values with stable wire names.
pub trait Choice: Copy + Sized + 'static {
    fn all() -> &'static [Self];

    fn value(self) -> &'static str;

    fn label(self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.value() == value)
    }
}

macro_rules! define_choice {
    ($name:ident, $doc:expr, { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $crate::taxonomy::Choice for $name {
            fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::taxonomy::Choice::label(*self))
            }
        }
    };
}

pub mod energy;
pub mod logistics;
pub mod metal;

pub use energy::{EnergySource, MiningEmission, ProcessingRoute};
pub use logistics::{DisposalRoute, TransportMode};
pub use metal::{FunctionalUnit, MetalType};

/// One selectable entry of a [`ChoiceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Names the vocabulary an enumerated field draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceSet {
    MetalType,
    FunctionalUnit,
    MiningEmission,
    EnergySource,
    ProcessingRoute,
    TransportMode,
    DisposalRoute,
}

fn options_of<C: Choice>() -> Vec<ChoiceOption> {
    C::all()
        .iter()
        .map(|c| ChoiceOption {
            value: c.value(),
            label: c.label(),
        })
        .collect()
}

impl ChoiceSet {
    /// All options in display order.
    #[must_use]
    pub fn options(self) -> Vec<ChoiceOption> {
        match self {
            Self::MetalType => options_of::<MetalType>(),
            Self::FunctionalUnit => options_of::<FunctionalUnit>(),
            Self::MiningEmission => options_of::<MiningEmission>(),
            Self::EnergySource => options_of::<EnergySource>(),
            Self::ProcessingRoute => options_of::<ProcessingRoute>(),
            Self::TransportMode => options_of::<TransportMode>(),
            Self::DisposalRoute => options_of::<DisposalRoute>(),
        }
    }

    /// Prompt shown while nothing is selected.
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::MetalType => "Select metal type",
            Self::FunctionalUnit => "Select functional unit",
            Self::MiningEmission => "Select emission type",
            Self::EnergySource => "Select energy source",
            Self::ProcessingRoute => "Select processing route",
            Self::TransportMode => "Select transport mode",
            Self::DisposalRoute => "Select disposal method",
        }
    }

    #[must_use]
    pub fn contains(self, value: &str) -> bool {
        self.options().iter().any(|o| o.value == value)
    }

    #[must_use]
    pub fn label_for(self, value: &str) -> Option<&'static str> {
        self.options()
            .into_iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
    }

    /// The value after `current`, wrapping through the unselected state.
    #[must_use]
    pub fn next_value(self, current: &str) -> &'static str {
        let options = self.options();
        match options.iter().position(|o| o.value == current) {
            None => options.first().map_or("", |o| o.value),
            Some(i) if i + 1 < options.len() => options[i + 1].value,
            Some(_) => "",
        }
    }

    /// The value before `current`, wrapping through the unselected state.
    #[must_use]
    pub fn prev_value(self, current: &str) -> &'static str {
        let options = self.options();
        match options.iter().position(|o| o.value == current) {
            None => options.last().map_or("", |o| o.value),
            Some(0) => "",
            Some(i) => options[i - 1].value,
        }
    }
}
