use std::collections::HashMap;

use tracing::debug;

use crate::analyzers::types::SurvivalCell;
use crate::analyzers::utility::rate;
use crate::passenger::{AgeGroup, Passenger, Pclass, Sex};

/// Number of cells in the complete (class, sex, age group) grid.
pub const GRID_SIZE: usize = Pclass::ALL.len() * Sex::ALL.len() * AgeGroup::ALL.len();

/// Survival counts for every (class, sex, age group) combination.
///
/// Always returns [`GRID_SIZE`] cells ordered by class, then sex
/// (female, male), then age group (child, teen, adult, senior).
/// Unobserved combinations are zero-filled with a rate of 0.0.
/// Passengers without an age group are left out of every cell.
pub fn survival_demographics(passengers: &[Passenger]) -> Vec<SurvivalCell> {
    let mut counts: HashMap<(Pclass, Sex, AgeGroup), (usize, usize)> = HashMap::new();
    let mut without_age_group = 0usize;

    for p in passengers {
        let Some(age_group) = p.age_group() else {
            without_age_group += 1;
            continue;
        };

        let entry = counts.entry((p.pclass, p.sex, age_group)).or_default();
        entry.0 += 1;
        if p.survived {
            entry.1 += 1;
        }
    }

    debug!(
        observed_groups = counts.len(),
        without_age_group, "Survival groups counted"
    );

    let mut cells = Vec::with_capacity(GRID_SIZE);
    for pclass in Pclass::ALL {
        for sex in Sex::ALL {
            for age_group in AgeGroup::ALL {
                let (n_passengers, n_survivors) = counts
                    .get(&(pclass, sex, age_group))
                    .copied()
                    .unwrap_or_default();

                cells.push(SurvivalCell {
                    pclass,
                    sex,
                    age_group,
                    n_passengers,
                    n_survivors,
                    survival_rate: rate(n_survivors, n_passengers),
                });
            }
        }
    }

    cells
}

/// Passengers excluded from the grid because their age maps to no group.
pub fn count_without_age_group(passengers: &[Passenger]) -> usize {
    passengers.iter().filter(|p| p.age_group().is_none()).count()
}
