/// Faults raised inside a single check. Every variant is recorded as a
/// failed result; none of them escapes the runner.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("check panicked: {0}")]
    Panicked(String),
}

impl CheckFailure {
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }
}

/// Asserts `cond`, failing the enclosing check instead of panicking.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::CheckFailure::assertion(format!($($arg)+)));
        }
    };
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("check '{0}' is already registered")]
    DuplicateCheck(String),

    #[error("Failed to access file system: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(n: i32) -> std::result::Result<String, CheckFailure> {
        ensure!(n > 0, "expected a positive number, got {n}");
        Ok(format!("{n} is positive"))
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(positive(3).unwrap(), "3 is positive");

        let err = positive(-1).unwrap_err();
        assert!(matches!(err, CheckFailure::Assertion(_)));
        assert_eq!(
            err.to_string(),
            "assertion failed: expected a positive number, got -1"
        );
    }

    #[test]
    fn test_json_failure_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let failure: CheckFailure = json_err.into();
        assert!(failure.to_string().starts_with("invalid JSON"));
    }
}
