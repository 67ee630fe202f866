//! Men versus children, per class.
//!
//! Answers "in which class did more men survive than children, and by how
//! many". Survivor counts are summed from the survival grid. Totals are
//! counted from the raw table because the grid drops passengers without an
//! age group, and men of unknown age still count towards the class total.

use crate::analyzers::types::{BarSeries, ClassComparison, ComparisonBar, SurvivalCell};
use crate::passenger::{AgeGroup, Passenger, Pclass, Sex};

/// One row per class, zero-filled for classes with no passengers.
pub fn compare_men_children(
    cells: &[SurvivalCell],
    passengers: &[Passenger],
) -> Vec<ClassComparison> {
    Pclass::ALL
        .into_iter()
        .map(|pclass| {
            let in_class: Vec<&SurvivalCell> =
                cells.iter().filter(|c| c.pclass == pclass).collect();

            let men_survivors: usize = in_class
                .iter()
                .filter(|c| c.sex == Sex::Male)
                .map(|c| c.n_survivors)
                .sum();
            let child_survivors: usize = in_class
                .iter()
                .filter(|c| c.age_group == AgeGroup::Child)
                .map(|c| c.n_survivors)
                .sum();

            let men_total = passengers
                .iter()
                .filter(|p| p.pclass == pclass && p.sex == Sex::Male)
                .count();
            let child_total = passengers
                .iter()
                .filter(|p| p.pclass == pclass && p.age_group() == Some(AgeGroup::Child))
                .count();

            ClassComparison {
                pclass,
                men_survivors,
                child_survivors,
                men_total,
                child_total,
                difference_men_minus_children: men_survivors as i64 - child_survivors as i64,
            }
        })
        .collect()
}

/// Melts comparisons into long-format bar rows, one series after another.
pub fn comparison_bars(comparisons: &[ClassComparison]) -> Vec<ComparisonBar> {
    BarSeries::ALL
        .into_iter()
        .flat_map(|series| {
            comparisons.iter().map(move |c| ComparisonBar {
                pclass: c.pclass,
                difference_men_minus_children: c.difference_men_minus_children,
                series,
                count: match series {
                    BarSeries::MenSurvivors => c.men_survivors,
                    BarSeries::ChildSurvivors => c.child_survivors,
                    BarSeries::MenTotal => c.men_total,
                    BarSeries::ChildTotal => c.child_total,
                },
            })
        })
        .collect()
}
