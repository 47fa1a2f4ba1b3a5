use yansi::Paint;

/// Formats the input as green and bold.
pub fn paint_green_bold(input: &str) -> String {
    Paint::green(input).bold().to_string()
}

/// Formats the input as red and bold.
pub fn paint_red_bold(input: &str) -> String {
    Paint::red(input).bold().to_string()
}

/// Check mark shown next to passing checks and the all-passed banner.
pub fn pass_marker() -> String {
    paint_green_bold("✓")
}

/// Cross shown next to failing checks and the failure banner.
pub fn fail_marker() -> String {
    paint_red_bold("✗")
}
