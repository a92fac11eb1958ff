pub mod feedback;
pub mod nutrients;
pub mod risks;
pub mod score;

use crate::domain::profile::UserProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use self::feedback::FeedbackItem;
use self::nutrients::NutrientLevel;
use self::score::ScoreResult;

/// Everything the renderer needs for one assessment: the badge, the chart
/// series, the risk block, and the recommendation cards. Built fresh per
/// request; nothing is retained between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub bmi: f64,
    pub score: ScoreResult,
    pub risks: Vec<String>,
    pub nutrients: Vec<NutrientLevel>,
    pub feedback: Vec<FeedbackItem>,
}

/// Run the full pipeline over one profile. Pure and synchronous apart from
/// the report id and timestamp.
///
/// Caller invariants (documented, not enforced here): height > 0, or BMI is
/// undefined; calories > 0, or the ratio-dependent predictions come back
/// non-finite.
pub fn evaluate(profile: &UserProfile) -> HealthReport {
    let bmi = profile.bmi();
    let score = score::classify(score::compute_score(profile, bmi));
    let risks = risks::annotate_risks(profile, bmi);
    let nutrients = nutrients::predict_nutrients(profile);
    let feedback = feedback::generate_feedback(&nutrients);

    HealthReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        bmi,
        score,
        risks,
        nutrients,
        feedback,
    }
}
