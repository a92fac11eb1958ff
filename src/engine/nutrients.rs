use crate::domain::profile::{Activity, Gender, Smoking, UserProfile};
use serde::{Deserialize, Serialize};

/// The seven nutrients the predictor covers. `ALL` fixes the iteration order
/// everywhere: predictions, the chart payload, and feedback cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    #[serde(rename = "Vitamin A")]
    VitaminA,
    #[serde(rename = "Vitamin C")]
    VitaminC,
    #[serde(rename = "Vitamin D")]
    VitaminD,
    Calcium,
    Iron,
    Magnesium,
    Zinc,
}

impl Nutrient {
    pub const ALL: [Nutrient; 7] = [
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Zinc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Zinc => "Zinc",
        }
    }
}

/// Recommended level, as % of RDI. Constant across all nutrients.
pub const RECOMMENDED_RDI: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientLevel {
    pub nutrient: Nutrient,
    /// Predicted level as % of RDI, rounded to the nearest integer. Kept as
    /// f64 so a non-finite value from a zero-calorie profile propagates to
    /// the caller instead of being masked by an integer cast.
    pub predicted: f64,
    pub recommended: f64,
}

/// Gender- and activity-derived scalar applied to every nutrient before the
/// nutrient-specific adjustments. Any gender other than Male takes the 0.9
/// branch; the unknown activity variant leaves the multiplier untouched.
fn base_multiplier(profile: &UserProfile) -> f64 {
    let mut mult = if profile.gender == Gender::Male { 1.1 } else { 0.9 };
    match profile.activity {
        Activity::High => mult *= 1.2,
        Activity::Low => mult *= 0.8,
        _ => {}
    }
    mult
}

/// Predicted level per nutrient, in `Nutrient::ALL` order.
///
/// Zero calories make the macro ratios divide by zero; the resulting
/// non-finite values flow into Vitamin A and Magnesium untouched. Guarding
/// against that is the caller's job, not the predictor's.
pub fn predict_nutrients(profile: &UserProfile) -> Vec<NutrientLevel> {
    let mult = base_multiplier(profile);

    let calories = f64::from(profile.calories);
    let protein_ratio = f64::from(profile.protein) / calories * 1000.0;
    let fat_ratio = f64::from(profile.fat) / calories * 1000.0;
    // Carb ratio is derived alongside the other two but no formula consumes
    // it yet (a planned carb/fiber adjustment never landed). Kept so the
    // derivation stays in one place; remove together with this comment if
    // the adjustment is dropped for good.
    let _carb_ratio = f64::from(profile.carbs) / calories * 1000.0;

    let female = profile.gender == Gender::Female;
    let smoking_penalty = if profile.smoking == Smoking::Yes { 0.3 } else { 0.0 };

    Nutrient::ALL
        .iter()
        .map(|&nutrient| {
            let raw = match nutrient {
                Nutrient::VitaminA => 80.0 * mult * (1.0 + (fat_ratio - 30.0) / 100.0),
                Nutrient::VitaminC => 70.0 * mult * (1.0 - smoking_penalty),
                Nutrient::VitaminD => 60.0 * mult,
                Nutrient::Calcium => 75.0 * mult * (if female { 0.9 } else { 1.1 }),
                Nutrient::Iron => 85.0 * mult * (if female { 0.8 } else { 1.2 }),
                Nutrient::Magnesium => 65.0 * mult * (1.0 + (protein_ratio - 35.0) / 100.0),
                Nutrient::Zinc => 70.0 * mult,
            };
            NutrientLevel {
                nutrient,
                predicted: raw.round(),
                recommended: RECOMMENDED_RDI,
            }
        })
        .collect()
}
