use serde::{Deserialize, Serialize};

/// One snapshot of the intake form. Field names match the JSON keys the
/// frontend submits, so no renames are needed on the wire.
///
/// Enum fields use a catch-all variant: a value the form never produces
/// (a typo, a future option) deserializes instead of erroring, and every
/// scoring rule treats the catch-all as "matches nothing".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: i32,
    pub gender: Gender,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters. Must be positive; BMI is undefined otherwise and the
    /// engine does not guard it (web layer rejects height <= 0).
    pub height: f64,
    pub activity: Activity,
    /// Hours per night.
    pub sleep: i32,
    pub smoking: Smoking,
    pub alcohol: Alcohol,
    /// kcal per day. Zero propagates a non-finite macro ratio into the
    /// nutrient predictions (web layer rejects calories <= 0).
    pub calories: i32,
    pub meals: i32,
    pub protein: i32,
    pub carbs: i32,
    pub fat: i32,
    /// Free-form condition name; the literal "None" means no condition.
    pub disease: String,
    pub bp: PressureLevel,
    pub cholesterol: PressureLevel,
}

impl UserProfile {
    /// BMI = weight(kg) / height(m)^2, rounded to one decimal. The rounded
    /// value is what the score and risk rules compare against.
    pub fn bmi(&self) -> f64 {
        let meters = self.height / 100.0;
        let raw = self.weight / (meters * meters);
        (raw * 10.0).round() / 10.0
    }

    pub fn has_condition(&self) -> bool {
        self.disease != "None"
    }
}

/// The form sends enum values as plain strings ("Male", "High", ...). Each
/// enum deserializes through `From<String>` so an unrecognized string lands
/// on the catch-all variant instead of failing the request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Gender {
    Male,
    Female,
    /// Any value other than "Male"/"Female". Every gendered formula treats
    /// this as its else-branch, same as the original ternaries; whether
    /// that is the intended semantics is an open product question.
    Unspecified,
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Activity {
    Low,
    Moderate,
    High,
    Unknown,
}

impl From<String> for Activity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Low" => Activity::Low,
            "Moderate" => Activity::Moderate,
            "High" => Activity::High,
            _ => Activity::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Smoking {
    Yes,
    Former,
    No,
    Unknown,
}

impl From<String> for Smoking {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Yes" => Smoking::Yes,
            "Former" => Smoking::Former,
            "No" => Smoking::No,
            _ => Smoking::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Alcohol {
    Regular,
    Occasional,
    None,
    Unknown,
}

impl From<String> for Alcohol {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Regular" => Alcohol::Regular,
            "Occasional" => Alcohol::Occasional,
            "None" => Alcohol::None,
            _ => Alcohol::Unknown,
        }
    }
}

/// Shared by the blood pressure and cholesterol fields; both only
/// distinguish "High" from everything else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum PressureLevel {
    Normal,
    High,
    Unknown,
}

impl From<String> for PressureLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Normal" => PressureLevel::Normal,
            "High" => PressureLevel::High,
            _ => PressureLevel::Unknown,
        }
    }
}

/// Fixture shared by the engine tests: moderate activity, in-range sleep
/// (+5) and BMI 22.9 (+10), everything else neutral. Raw score 85 before a
/// test flips anything.
#[cfg(test)]
pub(crate) fn baseline() -> UserProfile {
    UserProfile {
        age: 30,
        gender: Gender::Male,
        weight: 70.0,
        height: 175.0,
        activity: Activity::Moderate,
        sleep: 8,
        smoking: Smoking::No,
        alcohol: Alcohol::Occasional,
        calories: 2000,
        meals: 3,
        protein: 70,
        carbs: 250,
        fat: 60,
        disease: "None".to_string(),
        bp: PressureLevel::Normal,
        cholesterol: PressureLevel::Normal,
    }
}
