use crate::{
    Result, ResultSet,
    term::{fail_marker, pass_marker},
};
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use tracing::debug;

/// Prints the run totals on stdout
pub fn summarize(results: &ResultSet) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    summarize_to(results, &mut out)
}

pub fn summarize_to<W: Write>(results: &ResultSet, out: &mut W) -> Result<()> {
    let passed = results.passed();
    let failed = results.failed();

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "Test Summary:")?;
    writeln!(out, "Total tests: {}", results.len())?;
    writeln!(out, "Passed: {passed}")?;
    writeln!(out, "Failed: {failed}")?;
    writeln!(out)?;

    if failed == 0 {
        writeln!(out, "{} All tests passed!", pass_marker())?;
    } else {
        writeln!(out, "{} {failed} test(s) failed", fail_marker())?;
    }
    Ok(())
}

/// Writes `results` to `path` as a pretty-printed JSON array, replacing any
/// existing file.
pub fn persist(results: &ResultSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    fs::write(path, json)?;
    debug!(path = %path.display(), count = results.len(), "report written");
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<ResultSet> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckResult;

    fn summary_of(results: &ResultSet) -> String {
        let mut out = Vec::new();
        summarize_to(results, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_all_passed() {
        let results: ResultSet = [
            CheckResult::pass("a", "ok"),
            CheckResult::pass("b", "ok"),
        ]
        .into_iter()
        .collect();

        let summary = summary_of(&results);
        assert!(summary.contains("Total tests: 2"));
        assert!(summary.contains("Passed: 2"));
        assert!(summary.contains("Failed: 0"));
        let banner = summary.trim_end().lines().last().unwrap();
        assert_eq!(banner, format!("{} All tests passed!", pass_marker()));
    }

    #[test]
    fn test_summary_with_failures() {
        let results: ResultSet = [
            CheckResult::fail("a", "Error: one"),
            CheckResult::pass("b", "ok"),
            CheckResult::fail("c", "Error: two"),
        ]
        .into_iter()
        .collect();

        let summary = summary_of(&results);
        assert!(summary.contains("Total tests: 3"));
        assert!(summary.contains("Passed: 1"));
        assert!(summary.contains("Failed: 2"));
        let banner = summary.trim_end().lines().last().unwrap();
        assert_eq!(banner, format!("{} 2 test(s) failed", fail_marker()));
        assert!(!summary.contains("All tests passed!"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_load_rejects_unknown_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"[{"test": "a", "status": "SKIP", "message": "nope"}]"#,
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, crate::Error::Json(_)));
    }
}
