//! Rule catalog: the category/rule tree every analysis pass reads.
//!
//! The catalog is built once from defaults, patched from configuration, and
//! then handed to the analyzer by value. It is never mutated during a scan.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordinal urgency of a finding, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl Severity {
    /// All levels, most urgent first (the order reports list them in).
    pub const DESCENDING: [Self; 5] = [
        Self::Blocker,
        Self::Critical,
        Self::Major,
        Self::Minor,
        Self::Info,
    ];

    /// Numeric level from 1 (info) to 5 (blocker).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Minor => 2,
            Self::Major => 3,
            Self::Critical => 4,
            Self::Blocker => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Minor => "minor",
            Self::Major => "major",
            Self::Critical => "critical",
            Self::Blocker => "blocker",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            "critical" => Ok(Self::Critical),
            "blocker" => Ok(Self::Blocker),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Rule category identifiers.
///
/// `General` is reserved for synthetic file-level findings (unreadable or
/// oversized files) and has no rules of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    CodingStandards,
    CodeSmells,
    ProductionReadiness,
    Performance,
    Security,
    General,
}

impl CategoryId {
    /// Categories that own rules, in evaluation order.
    pub const RULE_CATEGORIES: [Self; 5] = [
        Self::CodingStandards,
        Self::CodeSmells,
        Self::ProductionReadiness,
        Self::Performance,
        Self::Security,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CodingStandards => "coding-standards",
            Self::CodeSmells => "code-smells",
            Self::ProductionReadiness => "production-readiness",
            Self::Performance => "performance",
            Self::Security => "security",
            Self::General => "general",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CodingStandards => "Coding Standards",
            Self::CodeSmells => "Code Smells",
            Self::ProductionReadiness => "Production Readiness",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::General => "General",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "coding-standards" => Ok(Self::CodingStandards),
            "code-smells" => Ok(Self::CodeSmells),
            "production-readiness" => Ok(Self::ProductionReadiness),
            "performance" => Ok(Self::Performance),
            "security" => Ok(Self::Security),
            "general" => Ok(Self::General),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// Which slice of the catalog an analysis pass evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSet {
    /// Only the classic formatting/comment/debug checks.
    Basic,
    #[default]
    Extended,
}

/// Rule keys, grouped by category.
pub mod keys {
    pub const INDENTATION: &str = "indentation";
    pub const BRACES: &str = "braces";
    pub const LINE_LENGTH: &str = "line-length";
    pub const TRAILING_WHITESPACE: &str = "trailing-whitespace";
    pub const INLINE_COMMENTS: &str = "inline-comments";

    pub const LONG_METHODS: &str = "long-methods";
    pub const COMPLEX_METHODS: &str = "complex-methods";
    pub const DUPLICATED_CODE: &str = "duplicated-code";
    pub const LARGE_CLASSES: &str = "large-classes";

    pub const DEBUG_CODE: &str = "debug-code";
    pub const TODO_COMMENTS: &str = "todo-comments";
    pub const HARDCODED_VALUES: &str = "hardcoded-values";
    pub const EXCEPTION_HANDLING: &str = "exception-handling";

    pub const STRING_CONCATENATION: &str = "string-concatenation";
    pub const UNNECESSARY_LOOPS: &str = "unnecessary-loops";
    pub const RESOURCE_LEAKS: &str = "resource-leaks";

    pub const SQL_INJECTION: &str = "sql-injection";
    pub const HARDCODED_PASSWORDS: &str = "hardcoded-passwords";
    pub const UNSAFE_DESERIALIZATION: &str = "unsafe-deserialization";
}

/// Parameter names.
pub mod params {
    pub const MAX_LENGTH: &str = "max_length";
    pub const MAX_LINES: &str = "max_lines";
    pub const MAX_COMPLEXITY: &str = "max_complexity";
    pub const LOOKBACK_LINES: &str = "lookback_lines";
}

/// A single configurable rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub enabled: bool,
    pub severity: Severity,
    /// Numeric parameters (thresholds, max lengths). Not range-checked.
    #[serde(flatten)]
    pub params: IndexMap<String, i64>,
    /// Part of the basic rule set as well as the extended one.
    #[serde(skip)]
    pub basic: bool,
}

impl Rule {
    fn new(severity: Severity, basic: bool) -> Self {
        Self {
            enabled: true,
            severity,
            params: IndexMap::new(),
            basic,
        }
    }

    fn with_param(mut self, name: &str, value: i64) -> Self {
        self.params.insert(name.to_string(), value);
        self
    }

    /// Read a numeric parameter, falling back to `default` when unset.
    #[must_use]
    pub fn param_or(&self, name: &str, default: i64) -> i64 {
        self.params.get(name).copied().unwrap_or(default)
    }

    /// Merge a partial update into this rule.
    pub fn apply(&mut self, patch: &RulePatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(severity) = patch.severity {
            self.severity = severity;
        }
        for (name, value) in &patch.params {
            self.params.insert(name.clone(), *value);
        }
    }
}

/// Partial rule configuration, merged by [`RuleCatalog::update_rule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(flatten)]
    pub params: IndexMap<String, i64>,
}

impl RulePatch {
    #[must_use]
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_param(mut self, name: &str, value: i64) -> Self {
        self.params.insert(name.to_string(), value);
        self
    }
}

/// A named group of rules with its own on/off switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCategory {
    #[serde(skip)]
    pub id: CategoryId,
    pub name: String,
    pub enabled: bool,
    pub rules: IndexMap<String, Rule>,
}

impl RuleCategory {
    fn new(id: CategoryId, rules: Vec<(&str, Rule)>) -> Self {
        Self {
            id,
            name: id.display_name().to_string(),
            enabled: true,
            rules: rules
                .into_iter()
                .map(|(key, rule)| (key.to_string(), rule))
                .collect(),
        }
    }
}

/// The full category/rule tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    categories: IndexMap<String, RuleCategory>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        use keys::{
            BRACES, COMPLEX_METHODS, DEBUG_CODE, DUPLICATED_CODE, EXCEPTION_HANDLING,
            HARDCODED_PASSWORDS, HARDCODED_VALUES, INDENTATION, INLINE_COMMENTS, LARGE_CLASSES,
            LINE_LENGTH, LONG_METHODS, RESOURCE_LEAKS, SQL_INJECTION, STRING_CONCATENATION,
            TODO_COMMENTS, TRAILING_WHITESPACE, UNNECESSARY_LOOPS, UNSAFE_DESERIALIZATION,
        };
        use params::{LOOKBACK_LINES, MAX_COMPLEXITY, MAX_LENGTH, MAX_LINES};

        let categories = vec![
            RuleCategory::new(
                CategoryId::CodingStandards,
                vec![
                    (INDENTATION, Rule::new(Severity::Major, true)),
                    (BRACES, Rule::new(Severity::Major, true)),
                    (
                        LINE_LENGTH,
                        Rule::new(Severity::Minor, true).with_param(MAX_LENGTH, 120),
                    ),
                    (TRAILING_WHITESPACE, Rule::new(Severity::Minor, true)),
                    (INLINE_COMMENTS, Rule::new(Severity::Info, true)),
                ],
            ),
            RuleCategory::new(
                CategoryId::CodeSmells,
                vec![
                    (
                        LONG_METHODS,
                        Rule::new(Severity::Major, false).with_param(MAX_LINES, 200),
                    ),
                    (
                        COMPLEX_METHODS,
                        Rule::new(Severity::Major, false).with_param(MAX_COMPLEXITY, 10),
                    ),
                    (DUPLICATED_CODE, Rule::new(Severity::Minor, false)),
                    (
                        LARGE_CLASSES,
                        Rule::new(Severity::Major, false).with_param(MAX_LINES, 200),
                    ),
                ],
            ),
            RuleCategory::new(
                CategoryId::ProductionReadiness,
                vec![
                    (DEBUG_CODE, Rule::new(Severity::Blocker, true)),
                    (TODO_COMMENTS, Rule::new(Severity::Info, true)),
                    (HARDCODED_VALUES, Rule::new(Severity::Major, false)),
                    (EXCEPTION_HANDLING, Rule::new(Severity::Critical, false)),
                ],
            ),
            RuleCategory::new(
                CategoryId::Performance,
                vec![
                    (
                        STRING_CONCATENATION,
                        Rule::new(Severity::Minor, false).with_param(LOOKBACK_LINES, 20),
                    ),
                    (UNNECESSARY_LOOPS, Rule::new(Severity::Major, false)),
                    (RESOURCE_LEAKS, Rule::new(Severity::Critical, false)),
                ],
            ),
            RuleCategory::new(
                CategoryId::Security,
                vec![
                    (SQL_INJECTION, Rule::new(Severity::Blocker, false)),
                    (HARDCODED_PASSWORDS, Rule::new(Severity::Blocker, false)),
                    (UNSAFE_DESERIALIZATION, Rule::new(Severity::Critical, false)),
                ],
            ),
        ];

        Self {
            categories: categories
                .into_iter()
                .map(|category| (category.id.as_str().to_string(), category))
                .collect(),
        }
    }
}

impl RuleCatalog {
    /// The current category/rule tree.
    #[must_use]
    pub const fn get_config(&self) -> &IndexMap<String, RuleCategory> {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&RuleCategory> {
        self.categories.get(id.as_str())
    }

    #[must_use]
    pub fn rule(&self, category: &str, rule: &str) -> Option<&Rule> {
        self.categories.get(category)?.rules.get(rule)
    }

    /// Merge `patch` into the named rule.
    ///
    /// Returns `false` (and changes nothing) when either name is unknown.
    pub fn update_rule(&mut self, category: &str, rule: &str, patch: &RulePatch) -> bool {
        let Some(target) = self
            .categories
            .get_mut(category)
            .and_then(|c| c.rules.get_mut(rule))
        else {
            log::debug!("Ignoring update for unknown rule {category}.{rule}");
            return false;
        };
        target.apply(patch);
        true
    }

    /// Toggle a whole category. Returns `false` when the category is unknown.
    pub fn set_category_enabled(&mut self, category: &str, enabled: bool) -> bool {
        let Some(target) = self.categories.get_mut(category) else {
            log::debug!("Ignoring toggle for unknown category {category}");
            return false;
        };
        target.enabled = enabled;
        true
    }

    /// The rule as seen by an analysis pass: `None` if the rule, or its
    /// category, is disabled or outside `rule_set`.
    #[must_use]
    pub fn active_rule(&self, category: CategoryId, rule: &str, rule_set: RuleSet) -> Option<&Rule> {
        let cat = self.category(category).filter(|c| c.enabled)?;
        cat.rules
            .get(rule)
            .filter(|r| r.enabled && (r.basic || rule_set == RuleSet::Extended))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
