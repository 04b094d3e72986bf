use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    OutOfSteppedRange {
        field: &'static str,
        min: u32,
        max: u32,
        step: u32,
        actual: u32,
    },
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },
    EmptyList {
        field: &'static str,
    },
    InvalidPeriod {
        input: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::OutOfSteppedRange {
                field,
                min,
                max,
                step,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max} in steps of {step})"
            ),
            Self::MutuallyExclusive { first, second } => {
                write!(f, "{first} and {second} must not be set together")
            }
            Self::EmptyList { field } => write!(f, "{field} must not be an empty list"),
            Self::InvalidPeriod { input } => write!(f, "invalid ISO-8601 period: {input:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Aggregated client-side validation failure.
///
/// Invariant: holds at least one [`Violation`]. Request constructors collect
/// every violated constraint before failing, so the error describes the
/// complete set of problems rather than the first one encountered.
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    /// Every constraint violated by the rejected input.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, violation) in self.violations.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Default)]
/// Collector used by request constructors to aggregate violations.
pub(crate) struct Checks {
    violations: Vec<Violation>,
}

impl Checks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub(crate) fn non_empty(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(Violation::Empty { field });
        }
    }

    pub(crate) fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        let actual = value.chars().count();
        if actual > max {
            self.push(Violation::TooLong { field, max, actual });
        }
    }

    pub(crate) fn opt_max_len(&mut self, field: &'static str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.max_len(field, value, max);
        }
    }

    pub(crate) fn stepped(
        &mut self,
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
        step: u32,
    ) {
        if value < min || value > max || value % step != 0 {
            self.push(Violation::OutOfSteppedRange {
                field,
                min,
                max,
                step,
                actual: value,
            });
        }
    }

    pub(crate) fn opt_stepped(
        &mut self,
        field: &'static str,
        value: Option<u32>,
        min: u32,
        max: u32,
        step: u32,
    ) {
        if let Some(value) = value {
            self.stepped(field, value, min, max, step);
        }
    }

    pub(crate) fn non_empty_list<T>(&mut self, field: &'static str, items: &[T]) {
        if items.is_empty() {
            self.push(Violation::EmptyList { field });
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::single(Violation::Empty { field: "name" });
        assert_eq!(err.to_string(), "name must not be empty");

        let err = ValidationError::single(Violation::TooLong {
            field: "comment",
            max: 255,
            actual: 300,
        });
        assert_eq!(
            err.to_string(),
            "comment is too long: 300 characters (max 255)"
        );

        let err = ValidationError::single(Violation::OutOfSteppedRange {
            field: "bandwidth",
            min: 100,
            max: 1000,
            step: 100,
            actual: 150,
        });
        assert_eq!(
            err.to_string(),
            "bandwidth out of range: 150 (expected 100..=1000 in steps of 100)"
        );
    }

    #[test]
    fn checks_aggregate_every_violation() {
        let mut checks = Checks::new();
        checks.max_len("name", &"x".repeat(300), 255);
        checks.stepped("bandwidth", 150, 100, 1000, 100);
        checks.non_empty_list::<u64>("ssh_key_ids", &[]);

        let err = checks.finish().unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err.to_string().contains("name is too long"));
        assert!(err.to_string().contains("bandwidth out of range"));
        assert!(err.to_string().contains("ssh_key_ids"));
    }

    #[test]
    fn checks_pass_for_valid_input() {
        let mut checks = Checks::new();
        checks.max_len("name", "srv1", 255);
        checks.stepped("bandwidth", 500, 100, 1000, 100);
        assert!(checks.finish().is_ok());
    }

    #[test]
    fn stepped_rejects_values_outside_bounds_and_off_step() {
        for bad in [0, 50, 150, 1100] {
            let mut checks = Checks::new();
            checks.stepped("bandwidth", bad, 100, 1000, 100);
            assert!(checks.finish().is_err(), "expected {bad} to be rejected");
        }
        for good in [100, 500, 1000] {
            let mut checks = Checks::new();
            checks.stepped("bandwidth", good, 100, 1000, 100);
            assert!(checks.finish().is_ok(), "expected {good} to be accepted");
        }
    }
}
