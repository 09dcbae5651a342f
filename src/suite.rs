//! Fixture collection and the run driver.

use crate::config::{Settings, SuiteConfig};
use crate::context::RunContext;
use crate::fixture::{CaseRunner, TestFixture};
use crate::report::FinalReport;
use std::fmt;

/// Which fixtures and cases to run, written `Fixture` or `Fixture::case`.
///
/// An empty part selects everything at that level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    fixture: Option<String>,
    case: Option<String>,
}

impl Selector {
    /// Select every case of every fixture.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn parse(input: &str) -> Self {
        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };

        match input.split_once("::") {
            Some((fixture, case)) => Self {
                fixture: non_empty(fixture),
                case: non_empty(case),
            },
            None => Self {
                fixture: non_empty(input),
                case: None,
            },
        }
    }

    pub fn fixture(&self) -> Option<&str> {
        self.fixture.as_deref()
    }

    pub fn case(&self) -> Option<&str> {
        self.case.as_deref()
    }

    fn selects(&self, fixture: &str) -> bool {
        match self.fixture.as_deref() {
            Some(name) => name == fixture,
            None => true,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fixture.as_deref().unwrap_or(""))?;
        if let Some(case) = &self.case {
            write!(f, "::{}", case)?;
        }
        Ok(())
    }
}

/// Result of [`TestSuite::run_configured`].
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub context: RunContext,
    /// Status lines followed by the final statistics.
    pub console: String,
    /// Failure messages, meant for stderr.
    pub failures: String,
    pub exit_code: i32,
}

/// An ordered list of fixtures.
#[derive(Default)]
pub struct TestSuite {
    fixtures: Vec<Box<dyn TestFixture>>,
}

impl fmt::Debug for TestSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSuite")
            .field("fixtures", &self.names())
            .finish()
    }
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F: TestFixture + 'static>(&mut self, fixture: F) -> &mut Self {
        self.fixtures.push(Box::new(fixture));
        self
    }

    /// Fixture names in run order.
    pub fn names(&self) -> Vec<&str> {
        self.fixtures.iter().map(|fixture| fixture.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Remove the first fixture called `name`. Returns whether one was found.
    pub fn exclude(&mut self, name: &str) -> bool {
        match self.fixtures.iter().position(|fixture| fixture.name() == name) {
            Some(index) => {
                self.fixtures.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn reverse_order(&mut self) {
        self.fixtures.reverse();
    }

    /// Run the fixtures chosen by `selector`, returning their status lines.
    pub fn run(
        &self,
        selector: &Selector,
        context: &mut RunContext,
        settings: &Settings,
    ) -> String {
        let mut console = String::new();

        for fixture in &self.fixtures {
            let name = fixture.name();
            if !selector.selects(name) {
                continue;
            }

            tracing::debug!(fixture = name, %selector, "running fixture");
            let mut cases = CaseRunner::new(name, selector.case(), context, settings, &mut console);
            fixture.run(&mut cases);
        }

        console
    }

    /// Apply `config` to the suite and run it.
    ///
    /// Exclusions and ordering change the suite itself. Every selector from
    /// `config.run` runs in turn against one shared context, followed by a
    /// single final report.
    pub fn run_configured(&mut self, config: &SuiteConfig) -> RunOutcome {
        for name in config.excluded() {
            if !self.exclude(&name) {
                tracing::debug!(fixture = %name, "excluded fixture is not in the suite");
            }
        }
        if config.reverse_order {
            self.reverse_order();
        }

        let settings = config.settings();
        let mut selectors = config.selectors();
        if selectors.is_empty() {
            selectors.push(Selector::all());
        }

        let mut context = RunContext::new();
        let mut console = String::new();
        for selector in &selectors {
            console.push_str(&self.run(selector, &mut context, &settings));
        }

        console.push('\n');
        console.push_str(
            &FinalReport {
                mode: settings.output,
                context: &context,
            }
            .to_string(),
        );

        tracing::debug!(
            tests = context.tests_run(),
            asserts = context.asserts(),
            fails = context.fails(),
            "run finished"
        );

        RunOutcome {
            failures: context.failure_text(),
            exit_code: context.exit_code(),
            console,
            context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl TestFixture for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn run(&self, cases: &mut CaseRunner<'_>) {
            cases.case("one", |check| check.that(true));
            cases.case("two", |check| check.that(true));
        }
    }

    fn suite() -> TestSuite {
        let mut suite = TestSuite::new();
        suite.add(Named("A")).add(Named("B")).add(Named("C"));
        suite
    }

    #[test]
    fn test_selector_parse() {
        let both = Selector::parse("TestMath::addition");
        assert_eq!(both.fixture(), Some("TestMath"));
        assert_eq!(both.case(), Some("addition"));
        assert_eq!(both.to_string(), "TestMath::addition");

        let fixture_only = Selector::parse("TestMath");
        assert_eq!(fixture_only.fixture(), Some("TestMath"));
        assert_eq!(fixture_only.case(), None);

        let case_only = Selector::parse("::addition");
        assert_eq!(case_only.fixture(), None);
        assert_eq!(case_only.case(), Some("addition"));

        assert_eq!(Selector::parse(""), Selector::all());
        assert_eq!(Selector::parse("A::"), Selector::parse("A"));
    }

    #[test]
    fn test_names_exclude_and_reverse() {
        let mut suite = suite();
        assert_eq!(suite.len(), 3);
        assert_eq!(suite.names(), ["A", "B", "C"]);

        assert!(suite.exclude("B"));
        assert!(!suite.exclude("B"));
        suite.reverse_order();
        assert_eq!(suite.names(), ["C", "A"]);
    }

    #[test]
    fn test_run_selects_fixture_and_case() {
        let suite = suite();
        let settings = Settings::default();

        let mut context = RunContext::new();
        let console = suite.run(&Selector::all(), &mut context, &settings);
        assert_eq!(context.tests_run(), 6);
        assert_eq!(console.lines().count(), 6);

        let mut context = RunContext::new();
        let console = suite.run(&Selector::parse("B::two"), &mut context, &settings);
        assert_eq!(context.tests_run(), 1);
        assert!(console.starts_with("B::two."));

        let mut context = RunContext::new();
        suite.run(&Selector::parse("::one"), &mut context, &settings);
        assert_eq!(context.tests_run(), 3);

        let mut context = RunContext::new();
        let console = suite.run(&Selector::parse("Missing"), &mut context, &settings);
        assert_eq!(context.tests_run(), 0);
        assert!(console.is_empty());
    }

    #[test]
    fn test_run_configured_defaults() {
        let mut suite = suite();
        let outcome = suite.run_configured(&SuiteConfig::default());

        assert_eq!(outcome.exit_code, 0);
        assert_eq!(outcome.context.tests_run(), 6);
        assert!(outcome.failures.is_empty());
        assert!(outcome.console.contains("\nTest statistics\n"));
        assert!(outcome.console.ends_with("#Failed asserts.....: 0\n"));
    }
}
