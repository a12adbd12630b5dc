//! The fixed catalog of assessment inputs.
//!
//! [`Field`] names every input the wizard collects. The set is closed: a
//! record always carries exactly these keys. Display metadata and the value
//! rules for each field live in [`FIELD_SPECS`], indexed by discriminant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::step::Step;
use crate::taxonomy::ChoiceSet;

/// How a field's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free-form text.
    Text,
    /// Non-negative quantity.
    Number,
    /// Quantity that may be negative (net credits).
    SignedNumber,
    /// Share between 0 and 100.
    Percent,
    /// One value of a closed vocabulary.
    Choice(ChoiceSet),
}

impl FieldKind {
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Number | Self::SignedNumber | Self::Percent)
    }
}

/// Static description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub field: Field,
    pub step: Step,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Unit hint shown next to numeric inputs.
    pub unit: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Metal information
    MetalType,
    MiningLocation,
    OreGrade,
    ProductionVolume,
    FunctionalUnit,
    // Mining & ore extraction
    EnergyConsumptionMining,
    WaterConsumptionMining,
    EmissionsMining,
    LandUse,
    // Processing & energy
    TransportToProcessing,
    EnergySource,
    EnergyConsumptionProcessing,
    ProcessingRoute,
    RecycledInputRate,
    ChemicalInputs,
    RecoveryRate,
    // Transport & supply chain
    TransportDistances,
    TransportMode,
    Packaging,
    // Use phase
    ProductLifetime,
    // End-of-life
    ReuseRate,
    RecyclingRate,
    RecyclingEfficiency,
    DisposalRoute,
    TransportDisposal,
    // Impact metrics
    GlobalWarmingPotential,
    Acidification,
    WaterConsumption,
    EnergyDemand,
    WasteGenerated,
    AirEmissions,
    LandUseChange,
}

const fn spec(
    field: Field,
    step: Step,
    label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
    unit: Option<&'static str>,
) -> FieldSpec {
    FieldSpec {
        field,
        step,
        label,
        placeholder,
        kind,
        unit,
    }
}

use FieldKind::{Number, Percent, SignedNumber, Text};

/// Catalog entries in [`Field`] declaration order.
#[rustfmt::skip]
pub static FIELD_SPECS: [FieldSpec; Field::COUNT] = [
    spec(Field::MetalType, Step::MetalInformation, "Metal Type", "", FieldKind::Choice(ChoiceSet::MetalType), None),
    spec(Field::MiningLocation, Step::MetalInformation, "Mining Location / Region", "e.g., Australia, Chile, Canada", Text, None),
    spec(Field::OreGrade, Step::MetalInformation, "Ore Grade / Concentration (%)", "e.g., 2.5", Percent, Some("%")),
    spec(Field::ProductionVolume, Step::MetalInformation, "Production Volume / Quantity", "e.g., 1000", Number, None),
    spec(Field::FunctionalUnit, Step::MetalInformation, "Functional Unit", "", FieldKind::Choice(ChoiceSet::FunctionalUnit), None),
    spec(Field::EnergyConsumptionMining, Step::MiningExtraction, "Energy Consumption in Mining (diesel, electricity)", "Total energy consumption", Number, None),
    spec(Field::WaterConsumptionMining, Step::MiningExtraction, "Water Consumption in Mining", "Total water consumption", Number, None),
    spec(Field::EmissionsMining, Step::MiningExtraction, "Emissions from Mining (dust, particulates, methane)", "", FieldKind::Choice(ChoiceSet::MiningEmission), None),
    spec(Field::LandUse, Step::MiningExtraction, "Land Use / Land Disturbance", "Area affected (hectares)", Number, Some("ha")),
    spec(Field::TransportToProcessing, Step::ProcessingEnergy, "Transport from Mine to Processing Facility", "Distance in kilometers", Number, Some("km")),
    spec(Field::EnergySource, Step::ProcessingEnergy, "Energy Source & Mix (grid, renewables, coal, etc.)", "", FieldKind::Choice(ChoiceSet::EnergySource), None),
    spec(Field::EnergyConsumptionProcessing, Step::ProcessingEnergy, "Energy Consumption in Smelting / Refining", "Energy for processing", Number, None),
    spec(Field::ProcessingRoute, Step::ProcessingEnergy, "Type of Processing Route (primary vs recycled)", "", FieldKind::Choice(ChoiceSet::ProcessingRoute), None),
    spec(Field::RecycledInputRate, Step::ProcessingEnergy, "% of Recycled Input / Scrap Rate", "e.g., 25.5", Percent, Some("%")),
    spec(Field::ChemicalInputs, Step::ProcessingEnergy, "Chemical Inputs / Reagents / Fluxes", "List main chemicals used", Text, None),
    spec(Field::RecoveryRate, Step::ProcessingEnergy, "Losses / Inefficiencies / Yield (recovery rate)", "e.g., 95.2", Percent, Some("%")),
    spec(Field::TransportDistances, Step::TransportSupplyChain, "Transport Distances & Mode (all stages)", "Total transport distance (km)", Number, Some("km")),
    spec(Field::TransportMode, Step::TransportSupplyChain, "Transport Mode", "", FieldKind::Choice(ChoiceSet::TransportMode), None),
    spec(Field::Packaging, Step::TransportSupplyChain, "Packaging & Shipping (if relevant)", "Describe packaging materials and methods", Text, None),
    spec(Field::ProductLifetime, Step::UsePhase, "Expected Product Lifetime", "e.g., 25 years", Number, Some("years")),
    spec(Field::ReuseRate, Step::EndOfLife, "Reuse / Repurposing Rate", "e.g., 15.0 (%)", Percent, Some("%")),
    spec(Field::RecyclingRate, Step::EndOfLife, "Recycling Rate", "e.g., 75.0 (%)", Percent, Some("%")),
    spec(Field::RecyclingEfficiency, Step::EndOfLife, "Recycling Efficiency", "e.g., 90.0 (%)", Percent, Some("%")),
    spec(Field::DisposalRoute, Step::EndOfLife, "Disposal Route / Waste Treatment", "", FieldKind::Choice(ChoiceSet::DisposalRoute), None),
    spec(Field::TransportDisposal, Step::EndOfLife, "Transport for Disposal / Recycling", "Distance to disposal/recycling facility (km)", Number, Some("km")),
    spec(Field::GlobalWarmingPotential, Step::ImpactMetrics, "Global Warming Potential (CO\u{2082}-eq)", "e.g., 12.45 kg CO\u{2082}-eq", SignedNumber, Some("kg CO\u{2082}-eq")),
    spec(Field::Acidification, Step::ImpactMetrics, "Acidification, Eutrophication, POCP etc.", "Describe impact values", Text, None),
    spec(Field::WaterConsumption, Step::ImpactMetrics, "Water Consumption / Water Footprint", "Total water footprint (L)", Number, Some("L")),
    spec(Field::EnergyDemand, Step::ImpactMetrics, "Energy Demand (primary/non-renewable + renewable)", "Energy demand (MJ)", Number, Some("MJ")),
    spec(Field::WasteGenerated, Step::ImpactMetrics, "Waste Generated (solid, liquid, chemical)", "Waste generated (kg)", Number, Some("kg")),
    spec(Field::AirEmissions, Step::ImpactMetrics, "Air / Water Emissions (specific pollutants)", "Specific pollutants", Text, None),
    spec(Field::LandUseChange, Step::ImpactMetrics, "Land Use Change / Habitat Loss", "Area of habitat affected (hectares)", Number, Some("ha")),
];

impl Field {
    pub const COUNT: usize = 32;

    pub const ALL: [Self; Self::COUNT] = [
        Self::MetalType,
        Self::MiningLocation,
        Self::OreGrade,
        Self::ProductionVolume,
        Self::FunctionalUnit,
        Self::EnergyConsumptionMining,
        Self::WaterConsumptionMining,
        Self::EmissionsMining,
        Self::LandUse,
        Self::TransportToProcessing,
        Self::EnergySource,
        Self::EnergyConsumptionProcessing,
        Self::ProcessingRoute,
        Self::RecycledInputRate,
        Self::ChemicalInputs,
        Self::RecoveryRate,
        Self::TransportDistances,
        Self::TransportMode,
        Self::Packaging,
        Self::ProductLifetime,
        Self::ReuseRate,
        Self::RecyclingRate,
        Self::RecyclingEfficiency,
        Self::DisposalRoute,
        Self::TransportDisposal,
        Self::GlobalWarmingPotential,
        Self::Acidification,
        Self::WaterConsumption,
        Self::EnergyDemand,
        Self::WasteGenerated,
        Self::AirEmissions,
        Self::LandUseChange,
    ];

    #[must_use]
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    #[must_use]
    pub fn step(self) -> Step {
        self.spec().step
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Wire name of the field (`metalType`, `globalWarmingPotential`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MetalType => "metalType",
            Self::MiningLocation => "miningLocation",
            Self::OreGrade => "oreGrade",
            Self::ProductionVolume => "productionVolume",
            Self::FunctionalUnit => "functionalUnit",
            Self::EnergyConsumptionMining => "energyConsumptionMining",
            Self::WaterConsumptionMining => "waterConsumptionMining",
            Self::EmissionsMining => "emissionsMining",
            Self::LandUse => "landUse",
            Self::TransportToProcessing => "transportToProcessing",
            Self::EnergySource => "energySource",
            Self::EnergyConsumptionProcessing => "energyConsumptionProcessing",
            Self::ProcessingRoute => "processingRoute",
            Self::RecycledInputRate => "recycledInputRate",
            Self::ChemicalInputs => "chemicalInputs",
            Self::RecoveryRate => "recoveryRate",
            Self::TransportDistances => "transportDistances",
            Self::TransportMode => "transportMode",
            Self::Packaging => "packaging",
            Self::ProductLifetime => "productLifetime",
            Self::ReuseRate => "reuseRate",
            Self::RecyclingRate => "recyclingRate",
            Self::RecyclingEfficiency => "recyclingEfficiency",
            Self::DisposalRoute => "disposalRoute",
            Self::TransportDisposal => "transportDisposal",
            Self::GlobalWarmingPotential => "globalWarmingPotential",
            Self::Acidification => "acidification",
            Self::WaterConsumption => "waterConsumption",
            Self::EnergyDemand => "energyDemand",
            Self::WasteGenerated => "wasteGenerated",
            Self::AirEmissions => "airEmissions",
            Self::LandUseChange => "landUseChange",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// One wizard section with its field specs, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSection {
    pub number: usize,
    pub title: &'static str,
    pub fields: Vec<&'static FieldSpec>,
}

/// The full catalog grouped by step.
#[must_use]
pub fn catalog() -> Vec<CatalogSection> {
    Step::ALL
        .into_iter()
        .map(|step| CatalogSection {
            number: step.number(),
            title: step.title(),
            fields: step.fields().map(Field::spec).collect(),
        })
        .collect()
}

/// The catalog as pretty-printed JSON.
pub fn catalog_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&catalog())?)
}
