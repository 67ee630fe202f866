//! Row types produced by the analyzers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::passenger::{AgeGroup, Pclass, Sex};

/// One (class, sex, age group) cell of the survival grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalCell {
    pub pclass: Pclass,
    pub sex: Sex,
    pub age_group: AgeGroup,
    pub n_passengers: usize,
    pub n_survivors: usize,
    pub survival_rate: f64,
}

/// Men versus children for a single class.
///
/// Survivor counts come from the survival grid, totals from the raw table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassComparison {
    pub pclass: Pclass,
    pub men_survivors: usize,
    pub child_survivors: usize,
    pub men_total: usize,
    pub child_total: usize,
    pub difference_men_minus_children: i64,
}

impl ClassComparison {
    pub fn more_men_than_children(&self) -> bool {
        self.difference_men_minus_children > 0
    }
}

/// Series of the men-versus-children bar chart, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BarSeries {
    #[serde(rename = "Men survivors")]
    MenSurvivors,
    #[serde(rename = "Child survivors")]
    ChildSurvivors,
    #[serde(rename = "Men total (in class)")]
    MenTotal,
    #[serde(rename = "Children total (in class)")]
    ChildTotal,
}

impl BarSeries {
    pub const ALL: [BarSeries; 4] = [
        BarSeries::MenSurvivors,
        BarSeries::ChildSurvivors,
        BarSeries::MenTotal,
        BarSeries::ChildTotal,
    ];

    /// Totals are drawn faded behind the survivor bars.
    pub fn is_total(self) -> bool {
        matches!(self, BarSeries::MenTotal | BarSeries::ChildTotal)
    }
}

/// A long-format chart row: one bar of one series in one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonBar {
    pub pclass: Pclass,
    pub difference_men_minus_children: i64,
    pub series: BarSeries,
    pub count: usize,
}

/// Fare statistics for one observed (class, family size) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyFareCell {
    pub pclass: Pclass,
    pub family_size: u32,
    pub n_passengers: usize,
    pub avg_fare: f64,
    pub min_fare: f64,
    pub max_fare: f64,
}

/// A family group selected by the large-family check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeFamilyGroup {
    pub pclass: Pclass,
    pub family_size: u32,
    pub n_passengers: usize,
    pub avg_fare: f64,
    pub min_fare: f64,
    pub max_fare: f64,
    pub meets_or_exceeds_baseline: bool,
}

/// Large families of the target class compared against a baseline class fare.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeFamilyCheck {
    pub target_class: Pclass,
    pub min_family_size: u32,
    pub baseline_class: Pclass,
    /// Mean fare of the whole baseline class, `None` if it has no passengers.
    pub baseline_fare: Option<f64>,
    pub groups: Vec<LargeFamilyGroup>,
    pub n_groups_total: usize,
    pub n_groups_meeting: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurnameCount {
    pub last_name: String,
    pub count: usize,
}

/// Every table the dashboard reads, in one document.
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub schema_version: u8,
    pub generated_at: DateTime<Utc>,
    pub passenger_count: usize,
    pub passengers_without_age_group: usize,
    pub survival: Vec<SurvivalCell>,
    pub comparison: Vec<ClassComparison>,
    pub comparison_bars: Vec<ComparisonBar>,
    pub families: Vec<FamilyFareCell>,
    pub large_families: LargeFamilyCheck,
    pub surnames: Vec<SurnameCount>,
}
