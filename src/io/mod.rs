pub mod output;
pub mod terminal;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter};
pub use terminal::TerminalWriter;

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::core::{AttributionSet, ProjectInput};
use crate::errors::{Error, Result, ResultExt};
use crate::whatif::Scenario;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::file_system_with_source(format!("Failed to read {}", path.display()), path, e)
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        Error::file_system_with_source(format!("Failed to write {}", path.display()), path, e)
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_file(path)?;
    serde_json::from_str::<T>(&contents)
        .map_err(Error::from)
        .context(format!("Parsing {}", path.display()))
}

/// Load a flat project JSON object.
pub fn load_project(path: &Path) -> Result<ProjectInput> {
    read_json(path)
}

/// Load a `{feature: value}` attribution object.
pub fn load_attributions(path: &Path) -> Result<AttributionSet> {
    read_json(path)
}

/// Load a JSON array of scenarios.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let scenarios: Vec<Scenario> = read_json(path)?;
    if scenarios.is_empty() {
        return Err(Error::input(format!(
            "{} contains no scenarios",
            path.display()
        )));
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn loads_flat_project() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        write_file(
            &path,
            indoc! {r#"
                {"id": "p-7", "sector": "edtech", "budget": "SAR 200,000", "team_size": 4}
            "#},
        )
        .unwrap();

        let project = load_project(&path).unwrap();
        assert_eq!(project.id.as_deref(), Some("p-7"));
        assert!(project.features.contains("budget"));
    }

    #[test]
    fn missing_file_is_a_file_system_error() {
        let dir = TempDir::new().unwrap();
        let err = load_project(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        write_file(&path, "{not json").unwrap();
        let err = load_project(&path).unwrap_err();
        assert!(err.to_string().starts_with("Parsing"));
    }

    #[test]
    fn empty_scenario_list_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scenarios.json");
        write_file(&path, "[]").unwrap();
        assert!(matches!(load_scenarios(&path), Err(Error::Input(_))));
    }
}
