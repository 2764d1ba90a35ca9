//! `package.json` parsing shared by the dependency, test and messaging classifiers

use archscan_domain::FileContentMap;
use archscan_domain::constants::PACKAGE_JSON_PATH;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The subset of `package.json` the classifiers read
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PackageManifest {
    #[serde(default)]
    pub dependencies: Option<Map<String, Value>>,
    #[serde(default)]
    pub dev_dependencies: Option<Map<String, Value>>,
    #[serde(default)]
    pub package_manager: Option<String>,
}

impl PackageManifest {
    /// Parse the root `package.json`, `None` when it was not fetched
    pub fn from_contents(contents: &FileContentMap) -> Option<serde_json::Result<Self>> {
        contents
            .get(PACKAGE_JSON_PATH)
            .map(|raw| serde_json::from_str(raw))
    }

    /// Runtime entries in declaration order
    pub fn runtime(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.dependencies.iter().flat_map(Map::iter)
    }

    /// Dev entries in declaration order
    pub fn dev(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.dev_dependencies.iter().flat_map(Map::iter)
    }

    /// Whether `name` is declared as runtime or dev dependency
    pub fn declares(&self, name: &str) -> bool {
        self.dependencies
            .as_ref()
            .is_some_and(|deps| deps.contains_key(name))
            || self
                .dev_dependencies
                .as_ref()
                .is_some_and(|deps| deps.contains_key(name))
    }
}

/// Parse `package.json` ignoring errors; the dependency classifier reports them
pub(crate) fn parsed_manifest(contents: &FileContentMap) -> Option<PackageManifest> {
    PackageManifest::from_contents(contents).and_then(Result::ok)
}

/// Version string of a manifest value
pub(crate) fn version_of(value: &Value) -> String {
    match value {
        Value::String(version) => version.clone(),
        other => other.to_string(),
    }
}
