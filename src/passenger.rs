//! Passenger records and the fixed categorical axes used for grouping.
//!
//! Every categorical axis carries an explicit `ALL` table listing its
//! values in sort order. Grid generation and sorting read those tables
//! directly, so output order never depends on what happens to be present
//! in the data.

use serde::{Deserialize, Deserializer, Serialize};

/// Ticket class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Pclass {
    First,
    Second,
    Third,
}

impl Pclass {
    pub const ALL: [Pclass; 3] = [Pclass::First, Pclass::Second, Pclass::Third];

    pub fn number(self) -> u8 {
        match self {
            Pclass::First => 1,
            Pclass::Second => 2,
            Pclass::Third => 3,
        }
    }
}

impl TryFrom<u8> for Pclass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Pclass::First),
            2 => Ok(Pclass::Second),
            3 => Ok(Pclass::Third),
            other => Err(format!("passenger class must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<Pclass> for u8 {
    fn from(value: Pclass) -> Self {
        value.number()
    }
}

impl std::fmt::Display for Pclass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Female sorts before male.
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    /// Accepts any casing and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(format!("sex must be female or male, got {s:?}")),
        }
    }
}

impl TryFrom<String> for Sex {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bins. Lower bounds are exclusive except for child, upper bounds inclusive.
///
/// | Group  | Range        |
/// |--------|--------------|
/// | child  | [0, 12]      |
/// | teen   | (12, 19]     |
/// | adult  | (19, 59]     |
/// | senior | (59, ∞)      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    /// Returns `None` for a missing, NaN or negative age.
    pub fn from_age(age: Option<f64>) -> Option<AgeGroup> {
        match age? {
            a if a.is_nan() || a < 0.0 => None,
            a if a <= 12.0 => Some(AgeGroup::Child),
            a if a <= 19.0 => Some(AgeGroup::Teen),
            a if a <= 59.0 => Some(AgeGroup::Adult),
            _ => Some(AgeGroup::Senior),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of the passenger table.
///
/// Field aliases cover both the Kaggle headers and snake_case exports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Passenger {
    #[serde(rename = "PassengerId", alias = "passenger_id", alias = "passengerid")]
    pub passenger_id: u32,
    #[serde(rename = "Pclass", alias = "pclass")]
    pub pclass: Pclass,
    #[serde(rename = "Sex", alias = "sex")]
    pub sex: Sex,
    #[serde(rename = "Age", alias = "age")]
    pub age: Option<f64>,
    #[serde(
        rename = "Survived",
        alias = "survived",
        deserialize_with = "deserialize_flag"
    )]
    pub survived: bool,
    #[serde(rename = "SibSp", alias = "sib_sp", alias = "sibsp")]
    pub sib_sp: u32,
    #[serde(rename = "Parch", alias = "parch")]
    pub parch: u32,
    #[serde(rename = "Fare", alias = "fare", deserialize_with = "deserialize_fare")]
    pub fare: f64,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match u8::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "survived must be 0 or 1, got {other}"
        ))),
    }
}

/// Fares must be finite and non-negative; `NaN` and `inf` parse as `f64`.
fn deserialize_fare<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let fare = f64::deserialize(deserializer)?;
    if fare.is_finite() && fare >= 0.0 {
        Ok(fare)
    } else {
        Err(serde::de::Error::custom(format!(
            "fare must be a finite non-negative number, got {fare}"
        )))
    }
}

impl Passenger {
    pub fn age_group(&self) -> Option<AgeGroup> {
        AgeGroup::from_age(self.age)
    }

    /// Siblings/spouses plus parents/children plus the passenger.
    pub fn family_size(&self) -> u32 {
        self.sib_sp + self.parch + 1
    }

    /// Text before the first comma of the full name, trimmed.
    pub fn last_name(&self) -> &str {
        self.name
            .split_once(',')
            .map_or(self.name.as_str(), |(last, _)| last)
            .trim()
    }
}

/// The loaded passenger table.
///
/// Aggregators only ever see `&[Passenger]`, so no computation can alter
/// the table another one is reading.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    passengers: Vec<Passenger>,
}

impl Dataset {
    pub fn new(passengers: Vec<Passenger>) -> Self {
        Self { passengers }
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(name: &str, sib_sp: u32, parch: u32) -> Passenger {
        Passenger {
            passenger_id: 1,
            pclass: Pclass::Third,
            sex: Sex::Male,
            age: None,
            survived: false,
            sib_sp,
            parch,
            fare: 7.25,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_age_group_boundaries() {
        assert_eq!(AgeGroup::from_age(Some(0.0)), Some(AgeGroup::Child));
        assert_eq!(AgeGroup::from_age(Some(0.42)), Some(AgeGroup::Child));
        assert_eq!(AgeGroup::from_age(Some(12.0)), Some(AgeGroup::Child));
        assert_eq!(AgeGroup::from_age(Some(12.5)), Some(AgeGroup::Teen));
        assert_eq!(AgeGroup::from_age(Some(19.0)), Some(AgeGroup::Teen));
        assert_eq!(AgeGroup::from_age(Some(19.5)), Some(AgeGroup::Adult));
        assert_eq!(AgeGroup::from_age(Some(59.0)), Some(AgeGroup::Adult));
        assert_eq!(AgeGroup::from_age(Some(59.1)), Some(AgeGroup::Senior));
        assert_eq!(AgeGroup::from_age(Some(80.0)), Some(AgeGroup::Senior));
    }

    #[test]
    fn test_age_group_missing_or_invalid() {
        assert_eq!(AgeGroup::from_age(None), None);
        assert_eq!(AgeGroup::from_age(Some(f64::NAN)), None);
        assert_eq!(AgeGroup::from_age(Some(-1.0)), None);
    }

    #[test]
    fn test_sex_parse_normalizes_case_and_whitespace() {
        assert_eq!(" Male ".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!("FEMALE".parse::<Sex>(), Ok(Sex::Female));
        assert!("unknown".parse::<Sex>().is_err());
    }

    #[test]
    fn test_pclass_try_from() {
        assert_eq!(Pclass::try_from(1), Ok(Pclass::First));
        assert_eq!(Pclass::try_from(3), Ok(Pclass::Third));
        assert!(Pclass::try_from(0).is_err());
        assert!(Pclass::try_from(4).is_err());
    }

    #[test]
    fn test_ordering_tables_are_sorted() {
        assert!(Pclass::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Sex::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(AgeGroup::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_family_size() {
        assert_eq!(passenger("Doe, Mr. John", 0, 0).family_size(), 1);
        assert_eq!(passenger("Doe, Mr. John", 1, 3).family_size(), 5);
    }

    #[test]
    fn test_last_name() {
        assert_eq!(passenger("Braund, Mr. Owen Harris", 0, 0).last_name(), "Braund");
        assert_eq!(
            passenger("  van Billiard , Mr. Austin", 0, 0).last_name(),
            "van Billiard"
        );
        assert_eq!(passenger(" Nocomma ", 0, 0).last_name(), "Nocomma");
    }
}
