//! Rule dispatch engine.
//!
//! The engine owns the registered rules and runs the configured subset in
//! order against one graph. Rules run strictly sequentially: each
//! receives the context value returned by the previous one, so a later
//! rule may depend on state an earlier rule recorded there.

use crate::config::LintConfig;
use crate::graph::FlowQuery;
use crate::rules::base::{CheckReport, Rule, RuleKind};
use crate::rules::{FlowSizeRule, FuncNameRule, HttpPairRule, LoopRule};
use tracing::{debug, info};

/// Dispatches configured sub-rules against a flow graph.
pub struct RuleEngine<C> {
    rules: Vec<Box<dyn Rule<C>>>,
}

impl<C> RuleEngine<C> {
    /// Engine with the four core rules registered.
    pub fn new() -> Self {
        let mut engine = Self::empty();
        engine.register(Box::new(FlowSizeRule));
        engine.register(Box::new(FuncNameRule));
        engine.register(Box::new(HttpPairRule));
        engine.register(Box::new(LoopRule));
        engine
    }

    /// Engine with no rules registered.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule. Registering a kind again replaces the previous
    /// implementation, so hosts can swap out a core rule.
    pub fn register(&mut self, rule: Box<dyn Rule<C>>) {
        debug!(kind = rule.kind().name(), "registering rule");
        match self.rules.iter_mut().find(|r| r.kind() == rule.kind()) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Kinds currently registered, in registration order.
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    fn rule_for(&self, kind: RuleKind) -> Option<&dyn Rule<C>> {
        self.rules
            .iter()
            .find(|r| r.kind() == kind)
            .map(|rule| rule.as_ref())
    }

    /// Run the configured sub-rules in order.
    ///
    /// Entries whose name parses to no registered kind contribute zero
    /// findings and pass the context through unchanged. An absent
    /// `subrules` list yields an empty report with the context untouched.
    pub fn check(&self, graph: &dyn FlowQuery, config: &LintConfig, context: C) -> CheckReport<C> {
        let mut findings = Vec::new();
        let mut context = context;

        let Some(subrules) = config.subrules.as_deref() else {
            return CheckReport { context, findings };
        };

        info!(subrules = subrules.len(), "starting lint run");
        for entry in subrules {
            let rule = RuleKind::from_name(&entry.name).and_then(|kind| self.rule_for(kind));
            let Some(rule) = rule else {
                debug!(name = %entry.name, "skipping unknown sub-rule");
                continue;
            };

            let outcome = rule.check(graph, entry, context);
            debug!(
                kind = rule.kind().name(),
                findings = outcome.findings.len(),
                "sub-rule finished"
            );
            findings.extend(outcome.findings);
            context = outcome.context;
        }
        info!(findings = findings.len(), "lint run finished");

        CheckReport { context, findings }
    }
}

impl<C> Default for RuleEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the core rule set against a graph.
///
/// Equivalent to `RuleEngine::new().check(graph, config, context)`.
pub fn check<C>(graph: &dyn FlowQuery, config: &LintConfig, context: C) -> CheckReport<C> {
    RuleEngine::new().check(graph, config, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SubruleConfig;
    use crate::graph::{FlowNode, FlowStore};
    use crate::models::Finding;
    use crate::rules::base::RuleOutcome;

    /// Counts its invocations in an i32 context and tags each finding
    /// with the count it observed.
    struct CountingRule;

    impl Rule<i32> for CountingRule {
        fn kind(&self) -> RuleKind {
            RuleKind::Loop
        }

        fn description(&self) -> &'static str {
            "Counting rule for dispatch tests"
        }

        fn check(
            &self,
            _graph: &dyn FlowQuery,
            _conf: &SubruleConfig,
            context: i32,
        ) -> RuleOutcome<i32> {
            let seen = context + 1;
            let finding = Finding::warn("test", "count", vec![format!("run-{seen}")], "counted");
            RuleOutcome::new(vec![finding], seen)
        }
    }

    fn sample_store() -> FlowStore {
        let mut store = FlowStore::new();
        store.add_flow("tab1", None);
        store.add_node("tab1", FlowNode::new("f1", "function"));
        store.add_node("tab1", FlowNode::new("a", "inject"));
        store.add_node("tab1", FlowNode::new("b", "debug"));
        store.wire("a", "b");
        store.wire("b", "a");
        store
    }

    #[test]
    fn missing_subrules_yields_empty_report() {
        let store = sample_store();
        let report = check(&store, &LintConfig::default(), 7);
        assert!(report.findings.is_empty());
        assert_eq!(report.context, 7);
    }

    #[test]
    fn unknown_subrule_names_are_skipped() {
        let store = sample_store();
        let config = LintConfig::with_subrules(["no-such-rule", "also-unknown"]);
        let report = check(&store, &config, ());
        assert!(report.findings.is_empty());
    }

    #[test]
    fn findings_follow_configured_order() {
        let store = sample_store();
        let config = LintConfig::with_subrules(["no-func-name", "loop"]);
        let report = check(&store, &config, ());
        let names: Vec<&str> = report.findings.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["no-func-name", "loop"]);

        let config = LintConfig::with_subrules(["loop", "no-func-name"]);
        let report = check(&store, &config, ());
        let names: Vec<&str> = report.findings.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["loop", "no-func-name"]);
    }

    #[test]
    fn context_threads_through_repeated_invocations() {
        let store = sample_store();
        let mut engine = RuleEngine::empty();
        engine.register(Box::new(CountingRule));

        let config = LintConfig::with_subrules(["loop", "loop", "loop"]);
        let report = engine.check(&store, &config, 0);
        assert_eq!(report.context, 3);
        let ids: Vec<&str> = report.findings.iter().map(|f| f.ids[0].as_str()).collect();
        assert_eq!(ids, vec!["run-1", "run-2", "run-3"]);
    }

    #[test]
    fn registering_a_kind_again_replaces_it() {
        let mut engine: RuleEngine<i32> = RuleEngine::new();
        assert_eq!(engine.rule_count(), 4);
        engine.register(Box::new(CountingRule));
        assert_eq!(engine.rule_count(), 4);

        let store = sample_store();
        let report = engine.check(&store, &LintConfig::with_subrules(["loop"]), 0);
        assert_eq!(report.context, 1);
        assert_eq!(report.findings[0].rule, "test");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let store = sample_store();
        let config = LintConfig::with_subrules(["flowsize", "no-func-name", "http-in-resp", "loop"]);
        let first = check(&store, &config, ());
        let second = check(&store, &config, ());
        assert_eq!(first.findings, second.findings);
    }

    #[test]
    fn default_engine_registers_core_kinds() {
        let engine: RuleEngine<()> = RuleEngine::new();
        assert_eq!(
            engine.rule_kinds(),
            vec![
                RuleKind::FlowSize,
                RuleKind::NoFuncName,
                RuleKind::HttpInResp,
                RuleKind::Loop
            ]
        );
    }
}
