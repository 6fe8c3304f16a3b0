//! Source-tree gate
//!
//! The JSX transform is never forced onto third-party code. Whether an asset
//! belongs to the source tree is decided by the caller; see
//! [`crate::asset::is_source_module`] for the path-based default.

/// True when pragma detection should run for the asset at all.
pub fn passes(is_source_module: bool) -> bool {
    is_source_module
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate() {
        assert!(passes(true));
        assert!(!passes(false));
    }
}
