//! Rule engine orchestrating rule execution over a single document.

use crate::rule::{Rule, RuleBox};
use crate::types::Problem;

use tracing::debug;

/// Runs an ordered collection of rules over document text.
///
/// Analysis is synchronous, single-pass CPU work: every enabled rule is
/// invoked against the same raw text and the problem lists are concatenated
/// in rule order, preserving each rule's emission order. There is no
/// cross-rule dedup and no positional sorting.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<RuleBox>,
}

impl RuleEngine {
    /// Creates an engine with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from an ordered rule list.
    #[must_use]
    pub fn with_rules(rules: Vec<RuleBox>) -> Self {
        Self { rules }
    }

    /// Appends a rule, preserving insertion order.
    pub fn push_rule(&mut self, rule: RuleBox) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the registered rules in order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Analyzes a document, returning the concatenated problems of every
    /// enabled rule.
    #[must_use]
    pub fn analyze(&self, text: &str) -> Vec<Problem> {
        let mut problems = Vec::new();

        for rule in &self.rules {
            if !rule.enabled() {
                debug!("Skipping disabled rule: {}", rule.id());
                continue;
            }
            problems.extend(rule.check(text));
        }

        problems
    }

    /// Looks up a rule by id.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.id() == id)
            .map(|rule| &**rule)
    }

    /// Looks up a rule by id for mutation (enable/disable, severity).
    pub fn rule_mut(&mut self, id: &str) -> Option<&mut RuleBox> {
        self.rules.iter_mut().find(|rule| rule.id() == id)
    }
}
