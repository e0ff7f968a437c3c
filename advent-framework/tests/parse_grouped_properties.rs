//! Property-based tests for blank-line grouped parsing

use advent_framework::input::{parse_grouped, parse_grouped_with};
use proptest::prelude::*;

/// Render groups the way puzzle inputs are written: one value per line,
/// a single blank line between groups.
fn render(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| group.iter().map(|line| format!("{}\n", line)).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn groups_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z0-9]{1,8}", 0..5), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Parsing rendered groups gives the groups back, empty ones included
    #[test]
    fn prop_render_then_parse_is_identity(groups in groups_strategy()) {
        let text = render(&groups);
        prop_assert_eq!(parse_grouped(&text), groups);
    }

    /// g blank lines always produce g + 1 groups
    #[test]
    fn prop_group_count_is_blank_lines_plus_one(groups in groups_strategy()) {
        let text = render(&groups);
        let blank_lines = text.lines().filter(|line| line.is_empty()).count();
        prop_assert_eq!(parse_grouped(&text).len(), blank_lines + 1);
    }

    /// Raw lines come back unmodified and in order
    #[test]
    fn prop_raw_lines_are_preserved(groups in groups_strategy()) {
        let text = render(&groups);
        let flattened: Vec<String> = parse_grouped(&text).into_iter().flatten().collect();
        let non_blank: Vec<String> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        prop_assert_eq!(flattened, non_blank);
    }

    /// Converting while parsing equals parsing then converting
    #[test]
    fn prop_integer_conversion_matches_mapping(
        groups in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..5), 1..8)
    ) {
        let as_text: Vec<Vec<String>> = groups
            .iter()
            .map(|g| g.iter().map(|n| n.to_string()).collect())
            .collect();
        let text = render(&as_text);

        let converted = parse_grouped_with(&text, |line| line.parse::<i64>()).unwrap();
        let mapped: Vec<Vec<i64>> = parse_grouped(&text)
            .into_iter()
            .map(|g| g.iter().map(|line| line.parse::<i64>().unwrap()).collect())
            .collect();

        prop_assert_eq!(&converted, &mapped);
        prop_assert_eq!(converted, groups);
    }

    /// A missing final newline does not move the last line out of its group
    #[test]
    fn prop_missing_final_newline_is_harmless(groups in groups_strategy()) {
        let text = render(&groups);
        if let Some(trimmed) = text.strip_suffix('\n') {
            // only when the last group ends with a value line
            if groups.last().is_some_and(|g| !g.is_empty()) {
                prop_assert_eq!(parse_grouped(trimmed), groups);
            }
        }
    }
}

#[test]
fn test_lone_blank_line() {
    assert_eq!(parse_grouped("\n"), vec![Vec::<String>::new(), Vec::new()]);
}
