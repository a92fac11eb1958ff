use crate::domain::profile::{Activity, Alcohol, Smoking, UserProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: i32,
    pub category: String,
    /// Display color for the score badge; cosmetic only.
    pub color: String,
    pub message: String,
}

/// Category/color thresholds, checked top-down, first match wins.
const CATEGORY_RULES: &[(i32, &str, &str)] = &[
    (90, "Excellent", "#4CAF50"),
    (75, "Good", "#8BC34A"),
    (60, "Average", "#FFC107"),
    (40, "Below Average", "#FF9800"),
    (i32::MIN, "Poor", "#F44336"),
];

/// Message thresholds. Deliberately coarser cut points than CATEGORY_RULES
/// (80/60/40 vs 90/75/60/40); the two tables are independent and must stay
/// separate.
const MESSAGE_RULES: &[(i32, &str)] = &[
    (
        80,
        "Your nutrient profile looks excellent! Your lifestyle choices are supporting good nutritional health.",
    ),
    (
        60,
        "Your nutrient profile is good, but there's room for improvement in some areas.",
    ),
    (
        40,
        "Your nutrient profile needs attention. Consider making some lifestyle changes to improve your nutritional health.",
    ),
    (
        i32::MIN,
        "Your nutrient profile indicates significant nutritional concerns. We recommend consulting with a healthcare professional.",
    ),
];

/// Base 70 plus independent additive adjustments, clamped to [0,100].
/// Catch-all enum variants match no branch and contribute nothing.
pub fn compute_score(profile: &UserProfile, bmi: f64) -> i32 {
    let mut score = 70;

    match profile.activity {
        Activity::High => score += 10,
        Activity::Low => score -= 10,
        _ => {}
    }

    if (7..=9).contains(&profile.sleep) {
        score += 5;
    }
    if profile.sleep < 6 || profile.sleep > 10 {
        score -= 5;
    }

    match profile.smoking {
        Smoking::Yes => score -= 15,
        Smoking::Former => score -= 5,
        _ => {}
    }

    match profile.alcohol {
        Alcohol::Regular => score -= 10,
        Alcohol::None => score += 5,
        _ => {}
    }

    if profile.has_condition() {
        score -= 10;
    }

    if (18.5..=24.9).contains(&bmi) {
        score += 10;
    }
    if (25.0..=29.9).contains(&bmi) {
        score -= 5;
    }
    if bmi >= 30.0 {
        score -= 15;
    }
    if bmi < 18.5 {
        score -= 10;
    }

    score.clamp(0, 100)
}

pub fn classify(score: i32) -> ScoreResult {
    // Both tables end with an i32::MIN sentinel, so a match always exists.
    let mut category = "Poor";
    let mut color = "#F44336";
    for &(min, cat, col) in CATEGORY_RULES {
        if score >= min {
            category = cat;
            color = col;
            break;
        }
    }

    let mut message = "";
    for &(min, msg) in MESSAGE_RULES {
        if score >= min {
            message = msg;
            break;
        }
    }

    ScoreResult {
        score,
        category: category.to_string(),
        color: color.to_string(),
        message: message.to_string(),
    }
}
