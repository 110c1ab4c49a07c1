//! TextFile property tests
//!
//! Random content mixes every line terminator and whitespace character the
//! reader and the word splitter care about.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use tempfile::tempdir;
use textfile::{CountKind, LineSeparator, TextFile};

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just('a'),
            Just('B'),
            Just('é'),
            Just('語'),
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\r'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Reference model: normalize terminators, then drop the final empty piece.
fn model_lines(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = normalized.split('\n').map(str::to_string).collect();
    if normalized.ends_with('\n') {
        lines.pop();
    }
    lines
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]

    #[test]
    fn read_returns_each_line_with_newline(content in text_strategy()) {
        let temp_dir = tempdir().unwrap();
        let file = TextFile::new(temp_dir.path().join("prop.txt"));

        file.write(&content).unwrap();

        let expected: String = model_lines(&content)
            .iter()
            .map(|line| format!("{}\n", line))
            .collect();
        prop_assert_eq!(file.read().unwrap(), expected);
        prop_assert_eq!(
            file.count(&[CountKind::Line]).unwrap(),
            model_lines(&content).len() as u64
        );
    }

    #[test]
    fn first_and_last_line_match_model(content in text_strategy()) {
        let temp_dir = tempdir().unwrap();
        let file = TextFile::new(temp_dir.path().join("edges.txt"));
        file.write(&content).unwrap();

        let lines = model_lines(&content);
        prop_assert_eq!(file.read_first_line().unwrap(), lines.first().cloned());
        prop_assert_eq!(file.read_last_line().unwrap(), lines.last().cloned());
    }

    #[test]
    fn duplicate_selectors_double_count(content in text_strategy()) {
        let temp_dir = tempdir().unwrap();
        let file = TextFile::new(temp_dir.path().join("dup.txt"));
        file.write(&content).unwrap();

        let words = file.count(&[CountKind::Word]).unwrap();
        prop_assert_eq!(file.count(&[CountKind::Word, CountKind::Word]).unwrap(), words * 2);
        prop_assert_eq!(file.count(&[CountKind::Spaces]).unwrap(), 0);
    }

    #[test]
    fn append_twice_equals_write_then_append(a in text_strategy(), b in text_strategy()) {
        let temp_dir = tempdir().unwrap();
        let appended = TextFile::new(temp_dir.path().join("appended.txt"));
        let written = TextFile::new(temp_dir.path().join("written.txt"));

        appended.clear().unwrap();
        appended.append(&a).unwrap();
        appended.append(&b).unwrap();

        written.write(&a).unwrap();
        written.append(&b).unwrap();

        prop_assert_eq!(appended.read().unwrap(), written.read().unwrap());
    }

    #[test]
    fn written_lines_read_back(lines in proptest::collection::vec("[a-z ]{0,8}", 0..8)) {
        let temp_dir = tempdir().unwrap();
        let file = TextFile::new(temp_dir.path().join("seq.txt"))
            .with_line_separator(LineSeparator::Lf);

        file.write_lines(&lines).unwrap();

        let expected = model_lines(&lines.join("\n"));
        let read_back = file.read().unwrap();
        let actual: Vec<&str> = read_back.lines().collect();
        prop_assert_eq!(actual, expected);
    }
}
