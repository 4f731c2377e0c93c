//! Configuration types

use crate::error::{Error, Result};
use crate::types::Kind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default destination of the bundled header
pub const DEFAULT_OUT: &str = "./example/include/tensor.hpp";

/// Default implementation guard macro
pub const DEFAULT_IMPL_MACRO: &str = "TENSOR_LIB_IMPL";

/// Name of the optional config file looked up under the project root
pub const CONFIG_FILE_NAME: &str = "amalgam.yaml";

/// Amalgam configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project root; `src/` and `include/` are read from here
    pub root: PathBuf,

    /// Bundle destination, overwritten on every successful run
    pub out: PathBuf,

    /// Macro guarding the implementation section
    pub impl_macro: String,

    /// Recognized file extensions
    pub extensions: ExtensionTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            out: PathBuf::from(DEFAULT_OUT),
            impl_macro: DEFAULT_IMPL_MACRO.to_string(),
            extensions: ExtensionTable::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a YAML file. Missing keys keep their defaults.
    pub fn load_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Folders walked for project files, in bundle order
    pub fn source_roots(&self) -> Vec<PathBuf> {
        vec![self.root.join("src"), self.root.join("include")]
    }

    /// Check the values that would otherwise produce a broken bundle
    pub fn validate(&self) -> Result<()> {
        if !is_c_identifier(&self.impl_macro) {
            return Err(Error::InvalidMacro(self.impl_macro.clone()));
        }
        self.extensions.validate()
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Extension table, `{extension: kind}`, keys without the leading dot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionTable(BTreeMap<String, Kind>);

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::from_iter([("cpp", Kind::Source), ("hpp", Kind::Header)])
    }
}

impl<S: Into<String>> FromIterator<(S, Kind)> for ExtensionTable {
    fn from_iter<I: IntoIterator<Item = (S, Kind)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(ext, kind)| (ext.into(), kind)).collect())
    }
}

impl ExtensionTable {
    /// Iterate over `(extension, kind)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, Kind)> {
        self.0.iter().map(|(ext, kind)| (ext.as_str(), *kind))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for ext in self.0.keys() {
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(Error::Config(format!("invalid extension {:?}", ext)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.impl_macro, "TENSOR_LIB_IMPL");
        assert_eq!(config.extensions.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_roots_order() {
        let config = Config {
            root: PathBuf::from("proj"),
            ..Config::default()
        };
        assert_eq!(
            config.source_roots(),
            vec![PathBuf::from("proj/src"), PathBuf::from("proj/include")]
        );
    }

    #[test]
    fn test_rejects_bad_macro_names() {
        for name in ["", "1IMPL", "MY-IMPL", "A B"] {
            let config = Config {
                impl_macro: name.to_string(),
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidMacro(_))), "{name}");
        }

        let config = Config {
            impl_macro: "_lib_impl2".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_extensions() {
        let config = Config {
            extensions: ExtensionTable::from_iter([("", Kind::Header)]),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = Config {
            extensions: ExtensionTable::from_iter([("inc/h", Kind::Header)]),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_partial_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("amalgam.yaml");
        fs::write(
            &path,
            "impl_macro: MYLIB_IMPL\nextensions:\n  cc: source\n  h: header\n",
        )
        .unwrap();

        let config = Config::load_yaml(&path).unwrap();
        assert_eq!(config.impl_macro, "MYLIB_IMPL");
        assert_eq!(config.out, PathBuf::from(DEFAULT_OUT));

        let table: Vec<_> = config.extensions.iter().collect();
        assert_eq!(table, vec![("cc", Kind::Source), ("h", Kind::Header)]);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("amalgam.yaml");
        fs::write(&path, "extensions: [unclosed").unwrap();

        assert!(matches!(Config::load_yaml(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_yaml(&temp.path().join("nope.yaml"));
        assert!(matches!(result, Err(Error::Read { .. })));
    }
}
