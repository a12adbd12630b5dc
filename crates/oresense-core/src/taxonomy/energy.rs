use serde::{Deserialize, Serialize};

define_choice!(MiningEmission, "Dominant emission type at the mine site.", {
    Dust => ("dust", "Dust"),
    Particulates => ("particulates", "Particulates"),
    Methane => ("methane", "Methane"),
    Mixed => ("mixed", "Mixed emissions"),
});

define_choice!(EnergySource, "Energy mix feeding smelting and refining.", {
    Grid => ("grid", "Grid electricity"),
    Renewables => ("renewables", "Renewables"),
    Coal => ("coal", "Coal"),
    NaturalGas => ("natural-gas", "Natural gas"),
    Mixed => ("mixed", "Mixed sources"),
});

define_choice!(ProcessingRoute, "Primary versus secondary production.", {
    Primary => ("primary", "Primary production"),
    Recycled => ("recycled", "Recycled production"),
    Mixed => ("mixed", "Mixed (primary + recycled)"),
});
