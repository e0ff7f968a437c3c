//! Day 1: Calorie Counting
//!
//! Each elf's inventory is a group of snack calories; groups are separated
//! by blank lines.

use advent_framework::input::parse_grouped_with;
use advent_framework::{AutoRegisterSolver, ParseError, SolveError, Solver};
use itertools::Itertools;

/// Calories of a single snack
pub type Calories = u64;

/// Snacks carried by one elf
pub type Inventory = Vec<Calories>;

#[derive(AutoRegisterSolver)]
#[advent(tags = ["2022", "grouped"])]
pub struct Day01;

impl Solver for Day01 {
    const DAY: u8 = 1;
    type Input = Vec<Inventory>;
    type Answer = Calories;

    fn parse(text: &str) -> Result<Self::Input, ParseError> {
        let inventories = parse_grouped_with(text, |line| line.trim().parse::<Calories>())?;
        if inventories.iter().all(Vec::is_empty) {
            return Err(ParseError::MissingData("no calorie entries".to_string()));
        }
        Ok(inventories)
    }

    fn part_one(inventories: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(top_inventories(inventories, 1))
    }

    fn part_two(inventories: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(top_inventories(inventories, 3))
    }

    fn expected_test_result_one() -> Self::Answer {
        24000
    }

    fn expected_test_result_two() -> Self::Answer {
        45000
    }
}

/// Total calories of the `count` best-stocked inventories
///
/// Empty inventories (from a trailing blank line) count as zero.
fn top_inventories(inventories: &[Inventory], count: usize) -> Calories {
    inventories
        .iter()
        .map(|inventory| inventory.iter().sum::<Calories>())
        .k_largest(count)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_framework::{InputKind, MemorySource, SolverInstance, run_test};

    const EXAMPLE: &str = include_str!("../../../inputs/day01/test.txt");

    #[test]
    fn test_parse_example() {
        let inventories = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(
            inventories,
            vec![
                vec![1000, 2000, 3000],
                vec![4000],
                vec![5000, 6000],
                vec![7000, 8000, 9000],
                vec![10000],
            ]
        );
    }

    #[test]
    fn test_part_one_example() {
        let inventories = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(Day01::part_one(&inventories).unwrap(), 24000);
    }

    #[test]
    fn test_part_two_example() {
        let inventories = Day01::parse(EXAMPLE).unwrap();
        assert_eq!(Day01::part_two(&inventories).unwrap(), 45000);
    }

    #[test]
    fn test_trailing_empty_inventory_is_tolerated() {
        let inventories = Day01::parse("5\n\n7\n\n").unwrap();
        assert_eq!(inventories.len(), 3);
        assert_eq!(Day01::part_one(&inventories).unwrap(), 7);
        assert_eq!(Day01::part_two(&inventories).unwrap(), 12);
    }

    #[test]
    fn test_fewer_than_three_elves() {
        let inventories = Day01::parse("1\n2\n").unwrap();
        assert_eq!(Day01::part_two(&inventories).unwrap(), 3);
    }

    #[test]
    fn test_bad_line_is_reported() {
        let err = Day01::parse("100\n\nlots\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 3, .. }));
    }

    #[test]
    fn test_input_without_entries_is_missing_data() {
        assert!(matches!(Day01::parse(""), Err(ParseError::MissingData(_))));
        assert!(matches!(Day01::parse("\n\n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_self_test_passes_on_example() {
        let source = MemorySource::new()
            .with(1, InputKind::Real, "1\n\n2\n")
            .with(1, InputKind::Example, EXAMPLE);
        let instance = SolverInstance::<Day01>::load(&source).unwrap();

        assert!(run_test(&instance, 1).unwrap().passed);
        assert!(run_test(&instance, 2).unwrap().passed);
        assert_eq!(instance.part_one(None).unwrap(), 2);
    }
}
