pub mod cost;
pub mod error;
pub mod fence;
pub mod map;
pub mod parser;
pub mod part1;
pub mod part2;
pub mod regions;
