use std::collections::HashMap;

use crate::analyzers::types::SurnameCount;
use crate::passenger::Passenger;

/// Counts passengers per last name.
pub fn last_names(passengers: &[Passenger]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for p in passengers {
        *counts.entry(p.last_name().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Most frequent first, ties broken alphabetically.
pub fn ranked(counts: &HashMap<String, usize>) -> Vec<SurnameCount> {
    let mut rows: Vec<SurnameCount> = counts
        .iter()
        .map(|(last_name, &count)| SurnameCount {
            last_name: last_name.clone(),
            count,
        })
        .collect();

    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.last_name.cmp(&b.last_name)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::passenger;
    use crate::passenger::Sex;

    fn named(name: &str) -> Passenger {
        Passenger {
            name: name.to_string(),
            ..passenger(3, Sex::Male, None, false)
        }
    }

    #[test]
    fn test_last_names() {
        let passengers = vec![
            named("Andersson, Mr. Anders Johan"),
            named("Andersson, Miss. Ellis Anna Maria"),
            named(" Sage , Master. Thomas Henry"),
            named("Sage, Miss. Constance Gladys"),
            named("Sage, Mr. Frederick"),
            named("Braund, Mr. Owen Harris"),
        ];
        let counts = last_names(&passengers);

        assert_eq!(counts.len(), 3);
        assert_eq!(counts["Sage"], 3);
        assert_eq!(counts["Andersson"], 2);
        assert_eq!(counts["Braund"], 1);
    }

    #[test]
    fn test_ranked_order() {
        let counts = HashMap::from([
            ("Braund".to_string(), 1),
            ("Sage".to_string(), 3),
            ("Andersson".to_string(), 1),
        ]);
        let names: Vec<_> = ranked(&counts).into_iter().map(|r| r.last_name).collect();
        assert_eq!(names, vec!["Sage", "Andersson", "Braund"]);
    }

    #[test]
    fn test_last_names_empty() {
        assert!(last_names(&[]).is_empty());
    }
}
