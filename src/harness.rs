use crate::{
    CheckFailure, CheckResult, Error, Result, ResultSet, checks,
    checks::CheckOutcome,
    term::{fail_marker, pass_marker},
};
use std::{
    any::Any,
    io::{self, Write},
    panic::{self, AssertUnwindSafe},
};
use tracing::{debug, warn};

type Routine = Box<dyn Fn() -> CheckOutcome>;

struct Check {
    name: String,
    routine: Routine,
}

/// Ordered registry of named checks
#[derive(Default)]
pub struct Harness {
    checks: Vec<Check>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    /// A harness holding the built-in checks in their fixed order
    pub fn with_builtin_checks() -> Self {
        let mut harness = Self::new();
        for (name, routine) in checks::BUILTIN {
            harness.checks.push(Check {
                name: name.to_string(),
                routine: Box::new(routine),
            });
        }
        harness
    }

    /// Adds a check. Names must be unique; a duplicate is rejected and the
    /// registry is left untouched.
    pub fn register<F>(&mut self, name: impl Into<String>, routine: F) -> Result<&mut Self>
    where
        F: Fn() -> CheckOutcome + 'static,
    {
        let name = name.into();
        if self.checks.iter().any(|check| check.name == name) {
            return Err(Error::DuplicateCheck(name));
        }
        self.checks.push(Check {
            name,
            routine: Box::new(routine),
        });
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|check| check.name.as_str())
    }

    /// Runs every check, reporting progress on stdout
    pub fn run_all(&self) -> Result<ResultSet> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_all_to(&mut out)
    }

    /// Runs every check in registration order. A failing or panicking
    /// check is recorded as FAIL and the run moves on.
    pub fn run_all_to<W: Write>(&self, out: &mut W) -> Result<ResultSet> {
        writeln!(out, "Starting MCP Server Tests...")?;
        writeln!(out, "{}", "=".repeat(40))?;

        let mut results = ResultSet::new();
        for check in &self.checks {
            writeln!(out, "Testing {}...", check.name)?;
            debug!(check = %check.name, "running check");

            let result = match run_isolated(&check.routine) {
                Ok(message) => {
                    writeln!(out, "{} {} passed - {message}", pass_marker(), check.name)?;
                    CheckResult::pass(&check.name, message)
                }
                Err(failure) => {
                    warn!(check = %check.name, %failure, "check failed");
                    writeln!(out, "{} {} failed: {failure}", fail_marker(), check.name)?;
                    CheckResult::fail(&check.name, format!("Error: {failure}"))
                }
            };
            results.push(result);
        }

        Ok(results)
    }
}

/// Runs one routine, turning panics and blank PASS messages into failures.
fn run_isolated(routine: &Routine) -> CheckOutcome {
    let outcome = panic::catch_unwind(AssertUnwindSafe(routine)).unwrap_or_else(|payload| {
        Err(CheckFailure::Panicked(panic_message(payload.as_ref())))
    })?;

    if outcome.trim().is_empty() {
        return Err(CheckFailure::assertion("check returned an empty message"));
    }
    Ok(outcome)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
