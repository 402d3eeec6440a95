use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}'", other)),
        }
    }
}

/// Body returned by the prediction service. Only `gender` and `probability`
/// drive the form; `name` and `count` are kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub probability: f64,
    #[serde(default)]
    pub count: Option<u64>,
}

impl Prediction {
    /// Probability as a percentage with one decimal, e.g. `97.0`. Exact
    /// halves round away from zero.
    pub fn percentage(&self) -> String {
        let percent = self.probability * 100.0;
        // a hundredths 5 is only exact at .25/.75, i.e. an odd number of quarters
        let quarters = percent * 4.0;
        if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
            format!("{:.1}", (percent * 10.0).round() / 10.0)
        } else {
            format!("{:.1}", percent)
        }
    }
}

/// Last name/gender pair shown or saved during this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentSelection {
    pub name: String,
    pub gender: Option<Gender>,
}

impl CurrentSelection {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// How a form action ended. Failures here are already shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Done,
    Rejected(crate::utils::error::ValidationError),
    NoPrediction,
    FetchFailed,
    /// A newer submit started while this prediction was in flight.
    Superseded,
}

impl ActionStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, ActionStatus::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_and_display() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("unknown".parse::<Gender>().is_err());
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn test_prediction_deserialize_full_body() {
        let body = r#"{"count":1094417,"name":"alice","gender":"female","probability":0.97}"#;
        let prediction: Prediction = serde_json::from_str(body).unwrap();
        assert_eq!(prediction.gender, Some(Gender::Female));
        assert_eq!(prediction.count, Some(1094417));
        assert_eq!(prediction.percentage(), "97.0");
    }

    #[test]
    fn test_percentage_rounds_halves_up() {
        let percent = |probability: f64| {
            Prediction {
                name: None,
                gender: Some(Gender::Male),
                probability,
                count: None,
            }
            .percentage()
        };

        assert_eq!(percent(0.0125), "1.3");
        assert_eq!(percent(0.0025), "0.3");
        assert_eq!(percent(0.1225), "12.3");
        assert_eq!(percent(0.0075), "0.8");
        assert_eq!(percent(0.97), "97.0");
        assert_eq!(percent(0.5), "50.0");
        assert_eq!(percent(1.0), "100.0");
        assert_eq!(percent(0.0), "0.0");
        assert_eq!(percent(0.12345), "12.3");
    }

    #[test]
    fn test_prediction_missing_gender_is_none() {
        let prediction: Prediction = serde_json::from_str(r#"{"probability":0.0}"#).unwrap();
        assert_eq!(prediction.gender, None);

        let prediction: Prediction =
            serde_json::from_str(r#"{"name":"zzq","gender":null,"probability":0.0,"count":0}"#)
                .unwrap();
        assert_eq!(prediction.gender, None);
    }
}
