use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// The subset of `package.json` read during pragma detection.
///
/// Fields of the wrong JSON type deserialize as `None` rather than failing,
/// so a manifest with a malformed `dependencies` entry behaves like one
/// without it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackageManifest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,

    #[serde(default, deserialize_with = "lenient_map")]
    pub dependencies: Option<Map<String, Value>>,

    #[serde(
        default,
        rename = "devDependencies",
        deserialize_with = "lenient_map"
    )]
    pub dev_dependencies: Option<Map<String, Value>>,
}

impl PackageManifest {
    /// Parses manifest JSON. Syntax errors fail; a top-level value that is
    /// not an object yields an empty manifest.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// True when `name` is a key of either `dependencies` or `devDependencies`.
    /// The declared version is irrelevant.
    pub fn has_dependency(&self, name: &str) -> bool {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .any(|deps| deps.contains_key(name))
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        [&self.dependencies, &self.dev_dependencies]
            .into_iter()
            .flatten()
            .flat_map(|deps| deps.keys().map(String::as_str))
    }
}

fn lenient_map<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => Ok(Some(map)),
        _ => Ok(None),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}
