//! Tree configuration.
//!
//! The only tunable is the [`Policy`] deciding how duplicate inserts and
//! missing lookup targets are reported. It is fixed per tree so that `get`,
//! `remove`, `insert` and batch reporting always agree.

/// How a tree reports duplicate keys and missing targets.
///
/// | Situation                | `Strict`                     | `Lenient`          |
/// |--------------------------|------------------------------|--------------------|
/// | insert of a present key  | `Err(TreeError::DuplicateKey)` | `Ok(false)`      |
/// | get of an absent key     | `Err(TreeError::NotFound)`   | `Ok(None)`         |
/// | remove of an absent key  | `Err(TreeError::NotFound)`   | `Ok(None)`         |
///
/// In both cases the tree is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Policy {
    /// Duplicates and misses are errors.
    #[default]
    Strict,
    /// Duplicates are ignored and misses resolve to an absent result.
    Lenient,
}

/// Construction-time settings of an [`AvlTree`](crate::tree::AvlTree).
///
/// # Examples
///
/// ```rust
/// use bbtree::config::{Policy, TreeConfig};
/// use bbtree::tree::AvlTree;
///
/// let config = TreeConfig::default().with_policy(Policy::Lenient);
/// let mut tree: AvlTree<i32> = AvlTree::with_config(config);
///
/// assert_eq!(tree.insert_key(1), Ok(true));
/// assert_eq!(tree.insert_key(1), Ok(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeConfig {
    /// Duplicate and not-found reporting.
    pub policy: Policy,
}

impl TreeConfig {
    /// Returns a copy of this configuration using `policy`.
    #[inline]
    #[must_use]
    pub const fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns `true` when duplicates and misses are reported as errors.
    #[inline]
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.policy, Policy::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_default_config_is_strict() {
        let config = TreeConfig::default();
        assert_eq!(config.policy, Policy::Strict);
        assert!(config.is_strict());
    }

    #[rstest]
    fn test_with_policy() {
        let config = TreeConfig::default().with_policy(Policy::Lenient);
        assert!(!config.is_strict());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"policy": "lenient"}"#, Policy::Lenient)]
    #[case(r#"{"policy": "strict"}"#, Policy::Strict)]
    #[case("{}", Policy::Strict)]
    fn test_config_deserialize(#[case] json: &str, #[case] expected: Policy) {
        let config: TreeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.policy, expected);
    }
}
