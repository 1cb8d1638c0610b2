//! Property tests for fixed line budgets.

use proptest::prelude::*;

use tailwatch::{read_tail, LineBudget, Viewport};

fn lines() -> impl Strategy<Value = Vec<String>> {
    let line = proptest::string::string_regex("[a-z0-9 ]{0,40}").unwrap();
    proptest::collection::vec(line, 0..60)
}

fn write_lines(dir: &tempfile::TempDir, lines: &[String]) -> std::path::PathBuf {
    let path = dir.path().join("prop.log");
    let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    std::fs::write(&path, content).unwrap();
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a file of k terminated lines yields exactly the last min(n, k)
    /// lines, byte for byte.
    #[test]
    fn property_fixed_returns_min_n_k_lines(
        source in lines(),
        n in 1usize..80,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(&dir, &source);

        let tail = read_tail(&path, LineBudget::Fixed(n), Viewport::default()).unwrap();

        let keep = n.min(source.len());
        let expected: String = source[source.len() - keep..]
            .iter()
            .map(|l| format!("{}\n", l))
            .collect();
        prop_assert_eq!(String::from_utf8(tail).unwrap(), expected);
    }

    /// PROPERTY: reading an unmodified file twice gives the same bytes.
    #[test]
    fn property_read_is_idempotent(
        source in lines(),
        n in 1usize..80,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = write_lines(&dir, &source);

        let first = read_tail(&path, LineBudget::Fixed(n), Viewport::default()).unwrap();
        let second = read_tail(&path, LineBudget::Fixed(n), Viewport::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: the tail is always a suffix of the file.
    #[test]
    fn property_tail_is_suffix(
        raw in proptest::collection::vec(any::<u8>(), 0..4096),
        n in 1usize..20,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.bin");
        std::fs::write(&path, &raw).unwrap();

        let tail = read_tail(&path, LineBudget::Fixed(n), Viewport::default()).unwrap();
        prop_assert!(raw.ends_with(&tail));
    }
}
