use serde::{Deserialize, Serialize};

define_choice!(TransportMode, "Main freight mode across the supply chain.", {
    Truck => ("truck", "Truck"),
    Rail => ("rail", "Rail"),
    Ship => ("ship", "Ship"),
    Air => ("air", "Air"),
    Mixed => ("mixed", "Mixed modes"),
});

define_choice!(DisposalRoute, "End-of-life waste treatment.", {
    Landfill => ("landfill", "Landfill"),
    Incineration => ("incineration", "Incineration"),
    HazardousWaste => ("hazardous-waste", "Hazardous waste facility"),
    Recycling => ("recycling", "Recycling facility"),
    Mixed => ("mixed", "Mixed disposal"),
});
