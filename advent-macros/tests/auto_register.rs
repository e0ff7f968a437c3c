use advent_framework::{
    AutoRegisterSolver, InputKind, MemorySource, ParseError, RegistryBuilder, SolveError, Solver,
};

#[derive(AutoRegisterSolver)]
#[advent(tags = ["words", "macro-test"])]
struct WordCount;

impl Solver for WordCount {
    const DAY: u8 = 29;
    type Input = Vec<String>;
    type Answer = usize;

    fn parse(text: &str) -> Result<Self::Input, ParseError> {
        Ok(text.split_whitespace().map(String::from).collect())
    }

    fn part_one(input: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(input.len())
    }

    fn part_two(input: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(input.iter().map(String::len).sum())
    }

    fn expected_test_result_one() -> Self::Answer {
        2
    }

    fn expected_test_result_two() -> Self::Answer {
        8
    }
}

#[derive(AutoRegisterSolver)]
struct Untagged;

impl Solver for Untagged {
    const DAY: u8 = 30;
    type Input = ();
    type Answer = u8;

    fn parse(_text: &str) -> Result<Self::Input, ParseError> {
        Ok(())
    }

    fn part_one(_input: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(1)
    }

    fn part_two(_input: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(2)
    }

    fn expected_test_result_one() -> Self::Answer {
        1
    }

    fn expected_test_result_two() -> Self::Answer {
        2
    }
}

#[test]
fn test_plugins_are_collected() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

    assert!(registry.contains(29));
    assert!(registry.contains(30));
    assert_eq!(registry.get_info(29).unwrap().tags, &["words", "macro-test"]);
    assert!(registry.get_info(30).unwrap().tags.is_empty());
}

#[test]
fn test_plugins_filtered_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert_eq!(registry.days().collect::<Vec<_>>(), vec![29]);
}

#[test]
fn test_plugin_day_comes_from_solver() {
    let days: Vec<u8> = advent_framework::inventory::iter::<advent_framework::SolverPlugin>()
        .map(|plugin| plugin.day())
        .collect();

    assert!(days.contains(&29));
    assert!(days.contains(&30));
}

#[test]
fn test_registered_plugin_runs() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
    let source = MemorySource::new()
        .with(29, InputKind::Real, "one two three")
        .with(29, InputKind::Example, "abcd efgh");

    let solver = registry.create_solver(29, &source).unwrap();
    assert!(solver.run_test(1).unwrap().passed);
    assert!(solver.run_test(2).unwrap().passed);
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "11");
}
