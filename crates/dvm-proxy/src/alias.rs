//! Method-name compatibility aliases
//!
//! Some callers ask for a method under a name the host class does not
//! declare. Each rule maps `(class, alias)` to the real member name and is
//! applied before matching. Only ordinary methods are rewritten, never
//! constructors.

use serde::{Deserialize, Serialize};

/// Rules every bridge starts with: `(class, alias, target)`
pub const BUILTIN_ALIASES: &[(&str, &str, &str)] =
    &[("java.util.UUID", "createString", "toString")];

/// One rewrite rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliasRule {
    /// Fully qualified class name the rule applies to
    pub class: String,
    /// Name requested by the caller
    pub alias: String,
    /// Name of the member actually resolved
    pub target: String,
}

impl AliasRule {
    /// Create a rule
    pub fn new(
        class: impl Into<String>,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            class: class.into(),
            alias: alias.into(),
            target: target.into(),
        }
    }
}

/// Ordered set of rewrite rules; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// Table with no rules
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Table holding [`BUILTIN_ALIASES`]
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN_ALIASES
                .iter()
                .map(|&(class, alias, target)| AliasRule::new(class, alias, target))
                .collect(),
        }
    }

    /// Append a rule after the existing ones
    pub fn push(&mut self, rule: AliasRule) {
        self.rules.push(rule);
    }

    /// Rules in lookup order
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Real member name for `name` requested on `class_name`
    pub fn rewrite<'a>(&'a self, class_name: &str, name: &'a str) -> &'a str {
        self.rules
            .iter()
            .find(|rule| rule.class == class_name && rule.alias == name)
            .map_or(name, |rule| rule.target.as_str())
    }
}

impl Extend<AliasRule> for AliasTable {
    fn extend<T: IntoIterator<Item = AliasRule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}
