//! Fixtures, test cases and assertions.
//!
//! A fixture groups named cases. Its [`TestFixture::run`] calls
//! [`CaseRunner::case`] once per case; every case receives a [`Check`] with
//! the assertion methods.
//!
//! ```
//! use simple_testsuite::{CaseRunner, Radix, TestFixture};
//!
//! struct TestMath;
//!
//! impl TestFixture for TestMath {
//!     fn name(&self) -> &str {
//!         "TestMath"
//!     }
//!
//!     fn run(&self, cases: &mut CaseRunner<'_>) {
//!         cases.case("addition", |check| {
//!             check.equals(4, 2 + 2);
//!             check.equals_radix(0xff_u32, 255, Radix::Hex);
//!         });
//!     }
//! }
//! ```

use crate::config::Settings;
use crate::context::RunContext;
use crate::recorder::{quote_literal, AssertRecord};
use crate::report::CaseStatus;
use std::cell::Cell;
use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe, Location};
use std::sync::Once;

thread_local! {
    static PANIC_EXPECTED: Cell<bool> = Cell::new(false);
}

static QUIET_HOOK: Once = Once::new();

/// Wrap the current panic hook so that panics caught by [`Check::panics`]
/// print nothing. Other panics still reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !PANIC_EXPECTED.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

fn panic_expected() -> bool {
    PANIC_EXPECTED.with(Cell::get)
}

/// A named group of test cases.
pub trait TestFixture {
    fn name(&self) -> &str;

    /// Run the cases of this fixture through `cases`.
    fn run(&self, cases: &mut CaseRunner<'_>);
}

/// Runs the cases of one fixture and writes their status lines.
pub struct CaseRunner<'a> {
    fixture: &'a str,
    filter: Option<&'a str>,
    context: &'a mut RunContext,
    settings: &'a Settings,
    console: &'a mut String,
    stopped: bool,
}

impl<'a> CaseRunner<'a> {
    pub(crate) fn new(
        fixture: &'a str,
        filter: Option<&'a str>,
        context: &'a mut RunContext,
        settings: &'a Settings,
        console: &'a mut String,
    ) -> Self {
        Self {
            fixture,
            filter,
            context,
            settings,
            console,
            stopped: false,
        }
    }

    pub fn fixture_name(&self) -> &str {
        self.fixture
    }

    /// True once a failing case stopped the fixture.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run the case `name` unless a case filter excludes it or an earlier
    /// failure stopped the fixture.
    pub fn case<F>(&mut self, name: &str, body: F)
    where
        F: FnOnce(&mut Check<'_>),
    {
        if self.filter.is_some_and(|filter| filter != name) {
            return;
        }
        if self.stopped {
            tracing::debug!(fixture = self.fixture, case = name, "skipped after failure");
            return;
        }

        tracing::debug!(fixture = self.fixture, case = name, "running case");
        self.context.record_test();
        let fails_before = self.context.fails();

        let mut check = Check {
            context: &mut *self.context,
            settings: self.settings,
        };
        body(&mut check);

        let passed = self.context.fails() == fails_before;
        let status = CaseStatus {
            mode: self.settings.output,
            fixture: self.fixture,
            case: name,
            passed,
        };
        self.console.push_str(&status.to_string());

        if !passed && self.settings.stop_on_error {
            self.stopped = true;
        }
    }
}

/// Base used to print integers in a failure report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Radix {
    #[default]
    Dec,
    Hex,
    Oct,
}

impl Radix {
    fn format<T>(self, value: &T) -> String
    where
        T: Display + fmt::LowerHex + fmt::Octal,
    {
        match self {
            Radix::Dec => format!("{}", value),
            Radix::Hex => format!("{:x}", value),
            Radix::Oct => format!("{:o}", value),
        }
    }
}

/// Assertions available inside a test case.
///
/// Failures are attributed to the source location that called the
/// assertion.
pub struct Check<'a> {
    context: &'a mut RunContext,
    settings: &'a Settings,
}

impl Check<'_> {
    /// Assert that `condition` holds.
    #[track_caller]
    pub fn that(&mut self, condition: bool) {
        if condition {
            self.context.record_pass();
        } else {
            let location = Location::caller();
            self.context
                .record_failure(location.file(), location.line(), None);
        }
    }

    /// Assert that two values are equal, comparing their displayed forms on
    /// failure.
    #[track_caller]
    pub fn equals<T>(&mut self, expected: T, actual: T)
    where
        T: PartialEq + Display,
    {
        let matched = expected == actual;
        self.compare(
            Location::caller(),
            matched,
            || (expected.to_string(), actual.to_string()),
            None,
        );
    }

    /// Like [`Check::equals`], printing `msg` below the values on failure.
    #[track_caller]
    pub fn equals_msg<T>(&mut self, expected: T, actual: T, msg: &str)
    where
        T: PartialEq + Display,
    {
        let matched = expected == actual;
        self.compare(
            Location::caller(),
            matched,
            || (expected.to_string(), actual.to_string()),
            Some(msg),
        );
    }

    /// Compare integers, printing them in `radix` on failure.
    #[track_caller]
    pub fn equals_radix<T>(&mut self, expected: T, actual: T, radix: Radix)
    where
        T: PartialEq + Display + fmt::LowerHex + fmt::Octal,
    {
        let matched = expected == actual;
        self.compare(
            Location::caller(),
            matched,
            || (radix.format(&expected), radix.format(&actual)),
            None,
        );
    }

    #[track_caller]
    pub fn equals_bool(&mut self, expected: bool, actual: bool) {
        self.compare(
            Location::caller(),
            expected == actual,
            || (expected.to_string(), actual.to_string()),
            None,
        );
    }

    /// An assertion that is known to fail for now.
    ///
    /// A mismatch only counts a to-do. A match is reported as a failure so
    /// the assertion gets promoted to a real one.
    #[track_caller]
    pub fn todo_equals<T>(&mut self, expected: T, actual: T)
    where
        T: PartialEq,
    {
        self.todo(Location::caller(), expected == actual);
    }

    #[track_caller]
    pub fn todo_equals_bool(&mut self, expected: bool, actual: bool) {
        self.todo(Location::caller(), expected == actual);
    }

    /// Assert that `f` panics.
    ///
    /// The expected panic is not printed by the panic hook.
    #[track_caller]
    pub fn panics<F>(&mut self, f: F)
    where
        F: FnOnce(),
    {
        let location = Location::caller();
        install_quiet_hook();
        let outer = PANIC_EXPECTED.with(|expected| expected.replace(true));
        let result = panic::catch_unwind(AssertUnwindSafe(f));
        PANIC_EXPECTED.with(|expected| expected.set(outer));

        if result.is_err() {
            self.context.record_pass();
        } else {
            self.context.record_failure(
                location.file(),
                location.line(),
                Some("The expected panic did not occur"),
            );
        }
    }

    fn todo(&mut self, location: &'static Location<'static>, matched: bool) {
        if matched {
            self.compare(
                location,
                false,
                || ("TODO assertion".to_string(), "The assertion succeeded".to_string()),
                None,
            );
        } else {
            self.context.record_todo();
        }
    }

    fn compare<F>(
        &mut self,
        location: &'static Location<'static>,
        matched: bool,
        values: F,
        message: Option<&str>,
    ) where
        F: FnOnce() -> (String, String),
    {
        if matched {
            self.context.record_pass();
            return;
        }

        let (expected, actual) = values();
        let record = AssertRecord {
            file: location.file().to_string(),
            line: location.line(),
            expected: quote_literal(&expected),
            actual: quote_literal(&actual),
            message: message.map(str::to_string),
        };
        self.context.record_mismatch(
            record,
            &self.settings.highlight,
            self.settings.output.annotates(),
        );
    }
}
