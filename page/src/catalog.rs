//! Loading and partitioning the alternatives data module.
//!
//! The page ships with a bundled data file (`data/alternatives.json`).
//! A different file can be supplied at build time; it is read once and
//! never mutated afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{AlternativePlatform, Tier};

const BUNDLED_DATA: &str = include_str!("../data/alternatives.json");

/// Errors raised while loading a data module.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read data file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid alternatives data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, read-only collection of platform records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    platforms: Vec<AlternativePlatform>,
}

impl Catalog {
    pub fn new(platforms: Vec<AlternativePlatform>) -> Self {
        Self { platforms }
    }

    /// The data module compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_DATA)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        tracing::debug!(records = catalog.len(), "parsed alternatives data");
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn platforms(&self) -> &[AlternativePlatform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Split into the two visual groups, keeping source order in each.
    pub fn partition(&self) -> Partition<'_> {
        let (popular, less_popular): (Vec<_>, Vec<_>) = self
            .platforms
            .iter()
            .partition(|alt| alt.tier() == Tier::Popular);
        Partition {
            popular,
            less_popular,
        }
    }
}

/// Records split by [`Tier`]. Every record is in exactly one list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition<'a> {
    pub popular: Vec<&'a AlternativePlatform>,
    pub less_popular: Vec<&'a AlternativePlatform>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn platform(name: &str, popularity: &str) -> AlternativePlatform {
        AlternativePlatform {
            name: name.into(),
            popularity: popularity.into(),
            ..Default::default()
        }
    }

    fn names<'a>(list: &[&'a AlternativePlatform]) -> Vec<&'a str> {
        list.iter().map(|alt| alt.name.as_str()).collect()
    }

    #[test]
    fn bundled_data_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());

        let partition = catalog.partition();
        assert!(!partition.popular.is_empty());
        assert!(!partition.less_popular.is_empty());
    }

    #[test]
    fn bundled_names_are_unique() {
        let catalog = Catalog::bundled().unwrap();
        let mut seen = std::collections::HashSet::new();
        for alt in catalog.platforms() {
            assert!(seen.insert(alt.name.clone()), "duplicate record: {}", alt.name);
        }
    }

    #[test]
    fn partition_is_total_disjoint_and_ordered() {
        let catalog = Catalog::new(vec![
            platform("A", "high"),
            platform("B", "less"),
            platform("C", "medium"),
            platform("D", "less"),
            platform("E", "unexpected"),
        ]);

        let partition = catalog.partition();

        assert_eq!(names(&partition.popular), vec!["A", "C", "E"]);
        assert_eq!(names(&partition.less_popular), vec!["B", "D"]);
        assert_eq!(
            partition.popular.len() + partition.less_popular.len(),
            catalog.len()
        );
    }

    #[test]
    fn empty_catalog_partitions_to_nothing() {
        let catalog = Catalog::default();
        let partition = catalog.partition();
        assert!(partition.popular.is_empty());
        assert!(partition.less_popular.is_empty());
    }

    #[test]
    fn non_string_popularity_lands_in_popular() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"name": "A", "popularity": null},
                {"name": "B", "popularity": 3},
                {"name": "C"},
                {"name": "D", "popularity": "less"}
            ]"#,
        )
        .unwrap();
        let partition = catalog.partition();

        assert_eq!(names(&partition.popular), vec!["A", "B", "C"]);
        assert_eq!(names(&partition.less_popular), vec!["D"]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Matrix","popularity":"high"}},{{"name":"Mumble","popularity":"less"}}]"#
        )
        .unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.platforms()[1].name, "Mumble");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
