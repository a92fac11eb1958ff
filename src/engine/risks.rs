use crate::domain::profile::{PressureLevel, Smoking, UserProfile};

/// Health considerations derived from the profile, in fixed order. Each rule
/// fires independently; an empty list means "no risks flagged" and the
/// renderer hides the block entirely rather than showing an empty one.
pub fn annotate_risks(profile: &UserProfile, bmi: f64) -> Vec<String> {
    let mut risks = Vec::new();

    if profile.has_condition() {
        risks.push(format!(
            "Your {} condition requires special nutritional attention.",
            profile.disease.to_lowercase()
        ));
    }

    if profile.bp == PressureLevel::High || profile.cholesterol == PressureLevel::High {
        risks.push(
            "Your cardiovascular indicators suggest you may need to monitor sodium and saturated fat intake."
                .to_string(),
        );
    }

    if profile.smoking == Smoking::Yes {
        risks.push(
            "Smoking can deplete certain nutrients. Consider increasing antioxidants like Vitamins C and E."
                .to_string(),
        );
    }

    if bmi >= 30.0 {
        risks.push(
            "Your BMI indicates obesity, which may require specialized nutritional planning."
                .to_string(),
        );
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::baseline;

    #[test]
    fn test_all_clear_profile_has_no_risks() {
        let profile = baseline();
        assert!(annotate_risks(&profile, 20.0).is_empty());
    }

    #[test]
    fn test_disease_message_lowercases_condition() {
        let mut profile = baseline();
        profile.disease = "Diabetes".to_string();
        let risks = annotate_risks(&profile, 20.0);
        assert_eq!(risks.len(), 1);
        assert_eq!(
            risks[0],
            "Your diabetes condition requires special nutritional attention."
        );
    }

    #[test]
    fn test_cardiovascular_fires_on_either_indicator() {
        let mut profile = baseline();
        profile.bp = PressureLevel::High;
        assert_eq!(annotate_risks(&profile, 20.0).len(), 1);

        let mut profile = baseline();
        profile.cholesterol = PressureLevel::High;
        let risks = annotate_risks(&profile, 20.0);
        assert_eq!(risks.len(), 1);
        assert!(risks[0].contains("cardiovascular"));
    }

    #[test]
    fn test_rules_fire_in_fixed_order() {
        let mut profile = baseline();
        profile.disease = "Hypertension".to_string();
        profile.bp = PressureLevel::High;
        profile.smoking = Smoking::Yes;
        let risks = annotate_risks(&profile, 31.5);
        assert_eq!(risks.len(), 4);
        assert!(risks[0].contains("hypertension condition"));
        assert!(risks[1].contains("cardiovascular"));
        assert!(risks[2].contains("Smoking"));
        assert!(risks[3].contains("BMI indicates obesity"));
    }

    #[test]
    fn test_bmi_obesity_boundary() {
        let profile = baseline();
        assert!(annotate_risks(&profile, 29.9).is_empty());
        assert_eq!(annotate_risks(&profile, 30.0).len(), 1);
    }
}
