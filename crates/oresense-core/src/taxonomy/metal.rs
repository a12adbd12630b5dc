use serde::{Deserialize, Serialize};

define_choice!(MetalType, "The metal under assessment.", {
    Aluminum => ("aluminum", "Aluminum"),
    Copper => ("copper", "Copper"),
    Iron => ("iron", "Iron"),
    Steel => ("steel", "Steel"),
    Zinc => ("zinc", "Zinc"),
    Nickel => ("nickel", "Nickel"),
    Other => ("other", "Other"),
});

define_choice!(
    FunctionalUnit,
    "Reference quantity that impacts are normalized against.",
    {
        Kilogram => ("kg", "kg"),
        Tonne => ("tonne", "tonne"),
        Pound => ("pound", "pound"),
        Ounce => ("ounce", "ounce"),
    }
);
