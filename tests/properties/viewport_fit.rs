//! Property tests for viewport-fit budgets.

use proptest::prelude::*;

use tailwatch::{read_tail, LineBudget, Viewport};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a final line of length L > width consumes 1 + L/width rows,
    /// leaving exactly the remaining rows for short lines above it.
    #[test]
    fn property_wide_line_consumes_wrapped_rows(
        width in 5u16..40,
        factor in 1usize..4,
        extra in 1usize..5,
        rows in 6u16..30,
    ) {
        let long_len = width as usize * factor + extra;
        let wrapped = 1 + long_len / width as usize;
        prop_assume!(wrapped < rows as usize);

        let short: String = (0..40).map(|i| format!("{}\n", i)).collect();
        let long = "x".repeat(long_len);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.log");
        std::fs::write(&path, format!("{}{}\n", short, long)).unwrap();

        let tail = read_tail(&path, LineBudget::FitViewport, Viewport::new(rows, width)).unwrap();
        let text = String::from_utf8(tail).unwrap();

        let short_lines = text.lines().count() - 1;
        prop_assert_eq!(short_lines, rows as usize - wrapped);
        let want = format!("{}\n", long);
        prop_assert!(text.ends_with(&want));
    }

    /// PROPERTY: an empty file is empty under any viewport.
    #[test]
    fn property_empty_file_any_viewport(rows in 0u16..100, cols in 0u16..300) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.log");
        std::fs::write(&path, "").unwrap();

        let tail = read_tail(&path, LineBudget::FitViewport, Viewport::new(rows, cols)).unwrap();
        prop_assert!(tail.is_empty());
    }
}
