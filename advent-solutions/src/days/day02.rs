//! Day 2: Rock Paper Scissors
//!
//! Each line is a round: the opponent's shape (`A`, `B`, `C`) and a second
//! column (`X`, `Y`, `Z`). Part one reads the second column as the shape to
//! play, part two as the outcome to reach.

use advent_framework::input::parse_lines_with;
use advent_framework::{AutoRegisterSolver, ParseError, SolveError, Solver};
use anyhow::{anyhow, bail};

#[derive(AutoRegisterSolver)]
#[advent(tags = ["2022", "lines"])]
pub struct Day02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> u64 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats
    fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one
    fn beaten_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    fn score(self) -> u64 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    fn of(mine: Shape, opponent: Shape) -> Outcome {
        if mine == opponent {
            Outcome::Draw
        } else if mine.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// The shape to play against `opponent` to reach this outcome
    fn required_shape(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Loss => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.beaten_by(),
        }
    }
}

/// Second column of the strategy guide; its meaning depends on the part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    X,
    Y,
    Z,
}

impl Column {
    fn as_shape(self) -> Shape {
        match self {
            Column::X => Shape::Rock,
            Column::Y => Shape::Paper,
            Column::Z => Shape::Scissors,
        }
    }

    fn as_outcome(self) -> Outcome {
        match self {
            Column::X => Outcome::Loss,
            Column::Y => Outcome::Draw,
            Column::Z => Outcome::Win,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub opponent: Shape,
    pub column: Column,
}

impl Round {
    fn score_as_shape(self) -> u64 {
        let mine = self.column.as_shape();
        mine.score() + Outcome::of(mine, self.opponent).score()
    }

    fn score_as_outcome(self) -> u64 {
        let outcome = self.column.as_outcome();
        outcome.required_shape(self.opponent).score() + outcome.score()
    }
}

fn parse_round(line: &str) -> anyhow::Result<Round> {
    let (opponent, column) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected two columns separated by a space"))?;

    let opponent = match opponent {
        "A" => Shape::Rock,
        "B" => Shape::Paper,
        "C" => Shape::Scissors,
        other => bail!("unknown opponent shape {:?}", other),
    };
    let column = match column.trim() {
        "X" => Column::X,
        "Y" => Column::Y,
        "Z" => Column::Z,
        other => bail!("unknown second column {:?}", other),
    };

    Ok(Round { opponent, column })
}

impl Solver for Day02 {
    const DAY: u8 = 2;
    type Input = Vec<Round>;
    type Answer = u64;

    fn parse(text: &str) -> Result<Self::Input, ParseError> {
        let rounds = parse_lines_with(text, parse_round)?;
        if rounds.is_empty() {
            return Err(ParseError::MissingData("no rounds in strategy guide".to_string()));
        }
        Ok(rounds)
    }

    fn part_one(rounds: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(rounds.iter().map(|round| round.score_as_shape()).sum())
    }

    fn part_two(rounds: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(rounds.iter().map(|round| round.score_as_outcome()).sum())
    }

    fn expected_test_result_one() -> Self::Answer {
        15
    }

    fn expected_test_result_two() -> Self::Answer {
        12
    }
}
