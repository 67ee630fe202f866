use std::collections::BTreeMap;

use tracing::debug;

use crate::analyzers::types::{FamilyFareCell, LargeFamilyCheck, LargeFamilyGroup};
use crate::analyzers::utility::mean;
use crate::config::AnalysisConfig;
use crate::passenger::{Passenger, Pclass};

/// Fare statistics for every observed (class, family size) pair.
///
/// Sorted by class, then family size ascending. Sizes that never occur are
/// not emitted.
pub fn family_groups(passengers: &[Passenger]) -> Vec<FamilyFareCell> {
    let mut groups: BTreeMap<(Pclass, u32), Vec<f64>> = BTreeMap::new();

    for p in passengers {
        groups
            .entry((p.pclass, p.family_size()))
            .or_default()
            .push(p.fare);
    }

    debug!(groups = groups.len(), "Family fare groups counted");

    groups
        .into_iter()
        .map(|((pclass, family_size), fares)| {
            let min_fare = fares.iter().copied().fold(f64::INFINITY, f64::min);
            let max_fare = fares.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            FamilyFareCell {
                pclass,
                family_size,
                n_passengers: fares.len(),
                // summation error must not push the mean outside [min, max]
                avg_fare: mean(&fares).max(min_fare).min(max_fare),
                min_fare,
                max_fare,
            }
        })
        .collect()
}

/// Mean fare over every passenger of `pclass`, `None` if there are none.
pub fn class_avg_fare(passengers: &[Passenger], pclass: Pclass) -> Option<f64> {
    let fares: Vec<f64> = passengers
        .iter()
        .filter(|p| p.pclass == pclass)
        .map(|p| p.fare)
        .collect();

    (!fares.is_empty()).then(|| mean(&fares))
}

pub fn first_class_avg_fare(passengers: &[Passenger]) -> Option<f64> {
    class_avg_fare(passengers, Pclass::First)
}

/// Flags large families of the target class whose highest fare reaches the
/// baseline class average.
///
/// The baseline is computed once over the entire baseline class, never per
/// group. Without a baseline no group is flagged.
pub fn large_family_check(
    cells: &[FamilyFareCell],
    baseline_fare: Option<f64>,
    config: &AnalysisConfig,
) -> LargeFamilyCheck {
    let groups: Vec<LargeFamilyGroup> = cells
        .iter()
        .filter(|c| {
            c.pclass == config.target_class && c.family_size >= config.large_family_min_size
        })
        .map(|c| LargeFamilyGroup {
            pclass: c.pclass,
            family_size: c.family_size,
            n_passengers: c.n_passengers,
            avg_fare: c.avg_fare,
            min_fare: c.min_fare,
            max_fare: c.max_fare,
            meets_or_exceeds_baseline: baseline_fare.is_some_and(|b| c.max_fare >= b),
        })
        .collect();

    let n_groups_meeting = groups.iter().filter(|g| g.meets_or_exceeds_baseline).count();

    debug!(
        n_groups_total = groups.len(),
        n_groups_meeting, "Large family groups checked"
    );

    LargeFamilyCheck {
        target_class: config.target_class,
        min_family_size: config.large_family_min_size,
        baseline_class: config.baseline_class,
        baseline_fare,
        n_groups_total: groups.len(),
        n_groups_meeting,
        groups,
    }
}

/// Runs [`large_family_check`] with the baseline taken from `passengers`.
pub fn check_large_families(passengers: &[Passenger], config: &AnalysisConfig) -> LargeFamilyCheck {
    let cells = family_groups(passengers);
    let baseline = class_avg_fare(passengers, config.baseline_class);
    large_family_check(&cells, baseline, config)
}
