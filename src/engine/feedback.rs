use crate::engine::nutrients::{Nutrient, NutrientLevel};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Deficient,
    Marginal,
    Excess,
    Optimal,
}

impl FeedbackStatus {
    /// Font Awesome class the frontend puts on the card icon.
    pub fn icon(&self) -> &'static str {
        match self {
            FeedbackStatus::Deficient => "fa-exclamation-triangle",
            FeedbackStatus::Marginal => "fa-info-circle",
            FeedbackStatus::Excess => "fa-exclamation-circle",
            FeedbackStatus::Optimal => "fa-check-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Low,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Nutrient label, or the fixed balance headline for the synthetic
    /// optimal card.
    pub title: String,
    pub status: FeedbackStatus,
    pub icon: String,
    pub message: String,
    pub tips: Vec<String>,
}

const FALLBACK_TIP: &str = "Consult with a nutritionist for personalized advice";

const OPTIMAL_TITLE: &str = "Excellent Nutrient Balance";
const OPTIMAL_MESSAGE: &str =
    "Based on your inputs, your predicted nutrient levels are well-balanced. Keep up your healthy lifestyle!";
const OPTIMAL_TIPS: &[&str] = &[
    "Regular exercise and physical activity",
    "Balanced diet with variety of foods",
    "Adequate hydration throughout the day",
    "Regular health check-ups",
];

/// Curated tips per nutrient and direction. Pure data; the strings are the
/// product copy, not anything derivable from the formulas.
static TIPS: Lazy<HashMap<(Nutrient, Direction), &'static [&'static str]>> = Lazy::new(|| {
    let mut m: HashMap<(Nutrient, Direction), &'static [&'static str]> = HashMap::new();
    m.insert(
        (Nutrient::VitaminA, Direction::Low),
        &[
            "Include more orange and yellow vegetables like carrots and sweet potatoes",
            "Add dark leafy greens like spinach and kale to your diet",
            "Consider eating liver or fish oil occasionally",
        ],
    );
    m.insert(
        (Nutrient::VitaminA, Direction::High),
        &[
            "Avoid excessive supplementation of Vitamin A",
            "Limit consumption of liver and fish oils",
            "Consult with a healthcare provider about your intake",
        ],
    );
    m.insert(
        (Nutrient::VitaminC, Direction::Low),
        &[
            "Increase citrus fruits like oranges and grapefruits",
            "Add bell peppers and strawberries to your meals",
            "Consider kiwi fruit and broccoli for Vitamin C sources",
        ],
    );
    m.insert(
        (Nutrient::VitaminC, Direction::High),
        &[
            "Reduce supplementation if taking Vitamin C supplements",
            "Excessive Vitamin C is usually excreted, but may cause digestive issues",
        ],
    );
    m.insert(
        (Nutrient::VitaminD, Direction::Low),
        &[
            "Get moderate sun exposure (15-30 minutes several times a week)",
            "Include fatty fish like salmon and mackerel in your diet",
            "Consider fortified foods like milk, orange juice, or cereals",
        ],
    );
    m.insert(
        (Nutrient::VitaminD, Direction::High),
        &[
            "Reduce supplementation if taking high doses",
            "Avoid multiple supplements containing Vitamin D",
            "Consult with a healthcare provider about your levels",
        ],
    );
    m.insert(
        (Nutrient::Calcium, Direction::Low),
        &[
            "Include more dairy products like milk, yogurt, and cheese",
            "Try calcium-rich non-dairy foods like fortified plant milks and tofu",
            "Add leafy greens like kale and bok choy to your diet",
        ],
    );
    m.insert(
        (Nutrient::Calcium, Direction::High),
        &[
            "Avoid excessive calcium supplementation",
            "If taking antacids containing calcium, consider alternatives",
            "Drink plenty of water to prevent kidney stone formation",
        ],
    );
    m.insert(
        (Nutrient::Iron, Direction::Low),
        &[
            "Include lean red meat in your diet",
            "Add plant-based iron sources like beans, lentils, and spinach",
            "Consume iron with Vitamin C to improve absorption",
        ],
    );
    m.insert(
        (Nutrient::Iron, Direction::High),
        &[
            "Avoid cooking in cast iron cookware if levels are high",
            "Reduce red meat consumption",
            "Consult with a healthcare provider about potential causes",
        ],
    );
    m.insert(
        (Nutrient::Magnesium, Direction::Low),
        &[
            "Include more nuts and seeds in your diet",
            "Add whole grains like brown rice and whole wheat",
            "Consider leafy greens and legumes for more magnesium",
        ],
    );
    m.insert(
        (Nutrient::Magnesium, Direction::High),
        &[
            "Review medications and supplements that may contain magnesium",
            "High levels are rare from diet alone but can occur with supplements",
        ],
    );
    m.insert(
        (Nutrient::Zinc, Direction::Low),
        &[
            "Include more oysters, red meat, and poultry",
            "Add beans, nuts, and whole grains to your diet",
            "Consider pumpkin seeds as a good plant-based source",
        ],
    );
    m.insert(
        (Nutrient::Zinc, Direction::High),
        &[
            "Avoid excessive supplementation",
            "Review any zinc lozenges or cold remedies you may be taking",
            "Be aware that high zinc can interfere with copper absorption",
        ],
    );
    m
});

fn tips_for(nutrient: Nutrient, direction: Direction) -> Vec<String> {
    TIPS.get(&(nutrient, direction))
        .map(|tips| tips.iter().map(|t| (*t).to_string()).collect())
        .unwrap_or_else(|| vec![FALLBACK_TIP.to_string()])
}

/// One card per out-of-band nutrient, in prediction order. Predictions in
/// [85,115] are considered on target and emit nothing; if every nutrient is
/// on target the result is a single synthetic optimal card.
pub fn generate_feedback(levels: &[NutrientLevel]) -> Vec<FeedbackItem> {
    let mut items = Vec::new();

    for level in levels {
        let predicted = level.predicted;
        if (85.0..=115.0).contains(&predicted) {
            continue;
        }

        // A NaN prediction (zero calories and zero grams) matches no band
        // and produces no card.
        let (status, direction, message) = if predicted < 70.0 {
            (
                FeedbackStatus::Deficient,
                Direction::Low,
                format!("Your {} levels are predicted to be low.", level.nutrient.label()),
            )
        } else if predicted < 85.0 {
            (
                FeedbackStatus::Marginal,
                Direction::Low,
                format!(
                    "Your {} levels may be slightly below optimal.",
                    level.nutrient.label()
                ),
            )
        } else if predicted > 115.0 {
            (
                FeedbackStatus::Excess,
                Direction::High,
                format!(
                    "Your {} levels may be higher than recommended.",
                    level.nutrient.label()
                ),
            )
        } else {
            continue;
        };

        items.push(FeedbackItem {
            title: level.nutrient.label().to_string(),
            status,
            icon: status.icon().to_string(),
            message,
            tips: tips_for(level.nutrient, direction),
        });
    }

    if items.is_empty() {
        items.push(FeedbackItem {
            title: OPTIMAL_TITLE.to_string(),
            status: FeedbackStatus::Optimal,
            icon: FeedbackStatus::Optimal.icon().to_string(),
            message: OPTIMAL_MESSAGE.to_string(),
            tips: OPTIMAL_TIPS.iter().map(|t| (*t).to_string()).collect(),
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::nutrients::RECOMMENDED_RDI;

    fn levels_with(values: [f64; 7]) -> Vec<NutrientLevel> {
        Nutrient::ALL
            .iter()
            .zip(values)
            .map(|(&nutrient, predicted)| NutrientLevel {
                nutrient,
                predicted,
                recommended: RECOMMENDED_RDI,
            })
            .collect()
    }

    #[test]
    fn test_all_on_target_yields_single_optimal_card() {
        let items = generate_feedback(&levels_with([100.0; 7]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, FeedbackStatus::Optimal);
        assert_eq!(items[0].title, "Excellent Nutrient Balance");
        assert_eq!(items[0].tips.len(), 4);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        // Exactly 85 and exactly 115 are on target on both ends.
        let items = generate_feedback(&levels_with([85.0, 115.0, 100.0, 100.0, 100.0, 100.0, 100.0]));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, FeedbackStatus::Optimal);
    }

    #[test]
    fn test_status_bands() {
        let items = generate_feedback(&levels_with([69.0, 70.0, 84.0, 116.0, 100.0, 100.0, 100.0]));
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].status, FeedbackStatus::Deficient);
        assert_eq!(items[0].title, "Vitamin A");
        assert_eq!(items[1].status, FeedbackStatus::Marginal);
        assert_eq!(items[2].status, FeedbackStatus::Marginal);
        assert_eq!(items[3].status, FeedbackStatus::Excess);
        assert_eq!(items[3].title, "Calcium");
        assert!(items[3].message.contains("higher than recommended"));
    }

    #[test]
    fn test_cards_follow_prediction_order() {
        let items = generate_feedback(&levels_with([50.0, 100.0, 50.0, 100.0, 50.0, 100.0, 130.0]));
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Vitamin A", "Vitamin D", "Iron", "Zinc"]);
    }

    #[test]
    fn test_tip_table_covers_every_direction() {
        for nutrient in Nutrient::ALL {
            for direction in [Direction::Low, Direction::High] {
                let tips = tips_for(nutrient, direction);
                assert!(
                    (2..=3).contains(&tips.len()),
                    "{} {:?} has {} tips",
                    nutrient.label(),
                    direction,
                    tips.len()
                );
                assert!(tips.iter().all(|t| t != FALLBACK_TIP));
            }
        }
    }

    #[test]
    fn test_nan_prediction_emits_no_card() {
        let items = generate_feedback(&levels_with([
            f64::NAN,
            100.0,
            100.0,
            100.0,
            100.0,
            100.0,
            100.0,
        ]));
        // The NaN row is skipped; everything else is on target, so the
        // synthetic optimal card is what comes back.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].status, FeedbackStatus::Optimal);
    }

    #[test]
    fn test_low_tips_attach_to_deficient_and_marginal() {
        let items = generate_feedback(&levels_with([60.0, 80.0, 100.0, 100.0, 100.0, 100.0, 100.0]));
        assert_eq!(items[0].tips[0], "Include more orange and yellow vegetables like carrots and sweet potatoes");
        assert_eq!(items[1].tips[0], "Increase citrus fruits like oranges and grapefruits");
    }
}
