//! Conformance cases and a runner for them.
//!
//! Each case pairs a source expression with its expected canonical
//! rendering. Results are collected into a [`TestReport`] that the caller
//! owns and threads through explicitly.

use crate::{errors::errors::Error, parser::parser::parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub source: &'static str,
    pub expected: &'static str,
}

const fn case(source: &'static str, expected: &'static str) -> Case {
    Case { source, expected }
}

pub const BANTAM_CASES: &[Case] = &[
    // Function call.
    case("a()", "a()"),
    case("a(b)", "a(b)"),
    case("a(b, c)", "a(b, c)"),
    case("a(b)(c)", "a(b)(c)"),
    case("a(b) + c(d)", "(a(b) + c(d))"),
    case("a(b ? c : d, e + f)", "a((b ? c : d), (e + f))"),
    // Unary precedence.
    case("~!-+a", "(~(!(-(+a))))"),
    case("a!!!", "(((a!)!)!)"),
    // Unary and binary precedence.
    case("-a * b", "((-a) * b)"),
    case("!a + b", "((!a) + b)"),
    case("~a ^ b", "((~a) ^ b)"),
    case("-a!", "(-(a!))"),
    case("!a!", "(!(a!))"),
    // Binary precedence.
    case("a = b + c * d ^ e - f / g", "(a = ((b + (c * (d ^ e))) - (f / g)))"),
    // Binary associativity.
    case("a = b = c", "(a = (b = c))"),
    case("a + b - c", "((a + b) - c)"),
    case("a * b / c", "((a * b) / c)"),
    case("a ^ b ^ c", "(a ^ (b ^ c))"),
    // Conditional operator.
    case("a ? b : c ? d : e", "(a ? b : (c ? d : e))"),
    case("a ? b ? c : d : e", "(a ? (b ? c : d) : e)"),
    case("a + b ? c * d : e / f", "((a + b) ? (c * d) : (e / f))"),
    // Grouping.
    case("a + (b + c) + d", "((a + (b + c)) + d)"),
    case("a ^ (b + c)", "(a ^ (b + c))"),
    case("(!a)!", "((!a)!)"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Mismatch { expected: String, actual: String },
    Failed { expected: String, error: Error },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Parses `source` and compares its rendering against `expected`.
pub fn check(source: &str, expected: &str) -> Outcome {
    match parse(source) {
        Ok(expr) => {
            let actual = expr.to_string();
            if actual == expected {
                Outcome::Passed
            } else {
                Outcome::Mismatch {
                    expected: expected.to_string(),
                    actual,
                }
            }
        }
        Err(error) => Outcome::Failed {
            expected: expected.to_string(),
            error,
        },
    }
}

/// Pass/fail tally for a run of cases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    passed: usize,
    failures: Vec<(Case, Outcome)>,
}

impl TestReport {
    pub fn new() -> Self {
        TestReport::default()
    }

    pub fn record(&mut self, case: Case, outcome: Outcome) {
        if outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failures.push((case, outcome));
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed()
    }

    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[(Case, Outcome)] {
        &self.failures
    }
}

pub fn run_cases(cases: &[Case]) -> TestReport {
    let mut report = TestReport::new();

    for case in cases {
        let outcome = check(case.source, case.expected);
        if !outcome.is_pass() {
            tracing::debug!(source = case.source, "case failed");
        }
        report.record(*case, outcome);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bantam_cases_all_pass() {
        let report = run_cases(BANTAM_CASES);

        assert!(report.failures().is_empty(), "{:?}", report.failures());
        assert_eq!(report.total(), BANTAM_CASES.len());
        assert!(report.all_passed());
    }

    #[test]
    fn test_check_mismatch() {
        let outcome = check("a + b", "a + b");

        assert_eq!(
            outcome,
            Outcome::Mismatch {
                expected: "a + b".to_string(),
                actual: "(a + b)".to_string()
            }
        );
    }

    #[test]
    fn test_report_counts_failures() {
        let cases = [case("a", "a"), case("a +", "(a + )"), case("a*b", "a*b")];
        let report = run_cases(&cases);

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(report.total(), 3);
        assert!(!report.all_passed());
        assert!(matches!(report.failures()[0].1, Outcome::Failed { .. }));
        assert!(matches!(report.failures()[1].1, Outcome::Mismatch { .. }));
    }
}
