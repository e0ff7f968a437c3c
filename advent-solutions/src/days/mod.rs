//! One module per day

pub mod day01;
pub mod day02;

pub use day01::Day01;
pub use day02::Day02;
