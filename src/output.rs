//! Output formatting and persistence for analyzer tables.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use std::fmt::Debug;
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::{debug, info};

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes rows to a CSV file with a header, replacing any existing file.
pub fn write_records<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = rows.len(), "Writing CSV");

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Serializes a value to a pretty JSON file.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Writing JSON");

    let body = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, body)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::family::family_groups;
    use crate::analyzers::fixtures::family_member;
    use crate::analyzers::survival::survival_demographics;
    use std::fs;

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&survival_demographics(&[]));
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&survival_demographics(&[])).unwrap();
    }

    #[test]
    fn test_write_survival_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survival.csv");

        write_records(&path, &survival_demographics(&[])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 25);
        assert_eq!(
            lines[0],
            "pclass,sex,age_group,n_passengers,n_survivors,survival_rate"
        );
        assert_eq!(lines[1], "1,female,child,0,0,0.0");
    }

    #[test]
    fn test_write_family_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("families.csv");
        let passengers = vec![family_member(3, 1, 4, 50.0), family_member(3, 1, 4, 80.0)];

        write_records(&path, &family_groups(&passengers)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(
            lines[0],
            "pclass,family_size,n_passengers,avg_fare,min_fare,max_fare"
        );
        assert_eq!(lines[1], "3,6,2,65.0,50.0,80.0");
    }

    #[test]
    fn test_write_records_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survival.csv");

        write_records(&path, &survival_demographics(&[])).unwrap();
        write_records(&path, &survival_demographics(&[])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 25);
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cells.json");

        write_json(&path, &survival_demographics(&[])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 24);
    }
}
