//! Assembles every analyzer output into a single [`DashboardReport`].

use chrono::Utc;
use tracing::info;

use crate::analyzers::demographic::{compare_men_children, comparison_bars};
use crate::analyzers::family::{class_avg_fare, family_groups, large_family_check};
use crate::analyzers::surname::{last_names, ranked};
use crate::analyzers::survival::{count_without_age_group, survival_demographics};
use crate::analyzers::types::DashboardReport;
use crate::config::AnalysisConfig;
use crate::passenger::Passenger;

pub const SCHEMA_VERSION: u8 = 1;

#[tracing::instrument(skip_all, fields(passengers = passengers.len()))]
pub fn build_report(passengers: &[Passenger], config: &AnalysisConfig) -> DashboardReport {
    let survival = survival_demographics(passengers);
    let comparison = compare_men_children(&survival, passengers);
    let comparison_bars = comparison_bars(&comparison);

    let families = family_groups(passengers);
    let baseline = class_avg_fare(passengers, config.baseline_class);
    let large_families = large_family_check(&families, baseline, config);

    let surnames = ranked(&last_names(passengers));

    info!(
        survival_cells = survival.len(),
        family_groups = families.len(),
        large_family_groups = large_families.n_groups_total,
        large_families_meeting_baseline = large_families.n_groups_meeting,
        surnames = surnames.len(),
        "Report built"
    );

    DashboardReport {
        schema_version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        passenger_count: passengers.len(),
        passengers_without_age_group: count_without_age_group(passengers),
        survival,
        comparison,
        comparison_bars,
        families,
        large_families,
        surnames,
    }
}
