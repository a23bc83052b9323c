use crate::text::width_of;

/// Routes `log` output through the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts that every line is `width` columns wide.
pub fn assert_all_width(lines: &[String], width: usize) {
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(width_of(line), width, "line {i} {line:?} has the wrong width");
    }
}
