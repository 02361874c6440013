use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::MdsqlfmtError;
use crate::mode::Mode;

/// Load mdsqlfmt configuration from an `mdsqlfmt.toml` file.
/// Searches parent directories of the given paths if no config path is
/// given; absence of a config file is not an error.
pub fn load_config(paths: &[PathBuf], config_path: Option<&Path>) -> Result<Mode, MdsqlfmtError> {
    let mut mode = Mode::default();

    let config_file = match config_path {
        Some(path) => {
            if path.exists() {
                Some(path.to_path_buf())
            } else {
                return Err(MdsqlfmtError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }
        None => find_config_file(paths),
    };

    if let Some(path) = config_file {
        let raw = load_config_from_path(&path)?;
        apply_config(&mut mode, &raw)?;
    }

    Ok(mode)
}

/// Search for an mdsqlfmt.toml in the common parent directories of the
/// given paths.
fn find_config_file(paths: &[PathBuf]) -> Option<PathBuf> {
    for parent in get_common_parents(paths) {
        let config = parent.join("mdsqlfmt.toml");
        if config.exists() {
            return Some(config);
        }
    }
    None
}

/// Get the parent directories of the given paths, ordered from most
/// specific to least specific.
fn get_common_parents(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut parents = Vec::new();

    for path in paths {
        let parent = if path.is_dir() {
            path.clone()
        } else {
            path.parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."))
        };

        // Walk up to root
        let mut current = Some(parent.as_path());
        while let Some(dir) = current {
            let dir_buf = dir.to_path_buf();
            if !parents.contains(&dir_buf) {
                parents.push(dir_buf);
            }
            current = dir.parent();
        }
    }

    parents
}

/// Load and parse a TOML config file into its top-level keys.
fn load_config_from_path(path: &Path) -> Result<HashMap<String, toml::Value>, MdsqlfmtError> {
    let content = std::fs::read_to_string(path).map_err(|e| MdsqlfmtError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let parsed: toml::Value = content.parse().map_err(|e| {
        MdsqlfmtError::Config(format!("failed to parse {}: {}", path.display(), e))
    })?;

    match parsed {
        toml::Value::Table(table) => {
            let mut map = HashMap::new();
            for (k, v) in table {
                map.insert(k.to_lowercase(), v);
            }
            Ok(map)
        }
        _ => Ok(HashMap::new()),
    }
}

/// Apply configuration values to a Mode.
fn apply_config(mode: &mut Mode, config: &HashMap<String, toml::Value>) -> Result<(), MdsqlfmtError> {
    if let Some(toml::Value::Integer(n)) = config.get("line_length") {
        mode.line_length = *n as usize;
    }

    if let Some(toml::Value::Boolean(b)) = config.get("use_tabs") {
        mode.use_tabs = *b;
    }

    if let Some(toml::Value::Integer(n)) = config.get("indent_width") {
        mode.indent_width = *n as u8;
    }

    if let Some(toml::Value::Array(arr)) = config.get("exclude") {
        mode.exclude = string_array(arr);
    }

    if let Some(toml::Value::Array(arr)) = config.get("ignore") {
        mode.ignore = string_array(arr);
    }

    if let Some(toml::Value::Array(arr)) = config.get("skip") {
        mode.skip = string_array(arr);
    }

    let known_keys = [
        "line_length",
        "use_tabs",
        "indent_width",
        "exclude",
        "ignore",
        "skip",
    ];
    for key in config.keys() {
        if !known_keys.contains(&key.as_str()) {
            return Err(MdsqlfmtError::Config(format!(
                "unknown config option: {}",
                key
            )));
        }
    }

    Ok(())
}

fn string_array(arr: &[toml::Value]) -> Vec<String> {
    arr.iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let mode = load_config(&[dir.path().to_path_buf()], None).unwrap();
        assert_eq!(mode.line_length, 80);
        assert!(mode.ignore.is_empty());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let result = load_config(&[], Some(Path::new("/nonexistent/mdsqlfmt.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_config() {
        let mut mode = Mode::default();
        let mut config = HashMap::new();
        config.insert("line_length".to_string(), toml::Value::Integer(100));
        config.insert("use_tabs".to_string(), toml::Value::Boolean(true));
        config.insert(
            "ignore".to_string(),
            toml::Value::Array(vec![toml::Value::String("changelog.md".to_string())]),
        );

        apply_config(&mut mode, &config).unwrap();
        assert_eq!(mode.line_length, 100);
        assert!(mode.use_tabs);
        assert_eq!(mode.ignore, vec!["changelog.md".to_string()]);
    }

    #[test]
    fn test_unknown_config_key_error() {
        let mut mode = Mode::default();
        let mut config = HashMap::new();
        config.insert("unknown_option".to_string(), toml::Value::Boolean(true));

        assert!(apply_config(&mut mode, &config).is_err());
    }

    #[test]
    fn test_config_discovered_in_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("mdsqlfmt.toml"),
            "line_length = 60\nskip = [\"explain\"]\n",
        )
        .unwrap();
        let docs = dir.path().join("docs");
        std::fs::create_dir(&docs).unwrap();

        let mode = load_config(&[docs], None).unwrap();
        assert_eq!(mode.line_length, 60);
        assert_eq!(mode.skip, vec!["explain".to_string()]);
    }
}
