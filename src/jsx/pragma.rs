//! Known JSX libraries and JSX-bearing file extensions

use serde::Serialize;
use std::path::Path;

/// A library whose presence selects a JSX pragma
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownLibrary {
    /// npm package name
    pub name: &'static str,
    /// Factory function JSX elements compile to
    pub pragma: &'static str,
}

/// Libraries in match precedence order. When several are present the first
/// one listed wins.
pub const KNOWN_LIBRARIES: &[KnownLibrary] = &[
    KnownLibrary {
        name: "react",
        pragma: "React.createElement",
    },
    KnownLibrary {
        name: "preact",
        pragma: "h",
    },
    KnownLibrary {
        name: "nervjs",
        pragma: "Nerv.createElement",
    },
    KnownLibrary {
        name: "hyperapp",
        pragma: "h",
    },
];

/// Extensions that always get the JSX transform, pragma or not
pub const JSX_EXTENSIONS: &[&str] = &["jsx", "tsx"];

pub fn library(name: &str) -> Option<&'static KnownLibrary> {
    KNOWN_LIBRARIES.iter().find(|lib| lib.name == name)
}

/// Case-sensitive; `App.JSX` does not qualify.
pub fn is_jsx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JSX_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = KNOWN_LIBRARIES.iter().map(|lib| lib.name).collect();
        assert_eq!(names, vec!["react", "preact", "nervjs", "hyperapp"]);
    }

    #[test]
    fn test_library_lookup() {
        assert_eq!(library("react").map(|l| l.pragma), Some("React.createElement"));
        assert_eq!(library("preact").map(|l| l.pragma), Some("h"));
        assert_eq!(library("nervjs").map(|l| l.pragma), Some("Nerv.createElement"));
        assert_eq!(library("hyperapp").map(|l| l.pragma), Some("h"));
        assert!(library("vue").is_none());
        assert!(library("React").is_none());
    }

    #[test]
    fn test_jsx_extensions() {
        assert!(is_jsx_extension(Path::new("src/App.jsx")));
        assert!(is_jsx_extension(Path::new("src/App.tsx")));
        assert!(!is_jsx_extension(Path::new("src/App.js")));
        assert!(!is_jsx_extension(Path::new("src/App.ts")));
        assert!(!is_jsx_extension(Path::new("src/App.JSX")));
        assert!(!is_jsx_extension(Path::new("src/jsx")));
        assert!(!is_jsx_extension(Path::new(".jsx")));
    }
}
