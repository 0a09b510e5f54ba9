// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod moves;
pub mod puzzle;
pub mod report;
pub mod solver;
pub mod tile;

mod data;
mod parser;
mod state;

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::config::Method;
use crate::puzzle::Puzzle;
use crate::solver::SolverOk;

pub use crate::data::Dir;
pub use crate::parser::ParserErr;

/// An initial board and the method that should solve it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub method: Method,
    pub puzzle: Puzzle,
}

pub trait LoadTask {
    fn load_task(&self, heavy_cost: u32) -> Result<Task, Box<dyn Error>>;
}

impl<P: AsRef<Path> + ?Sized> LoadTask for P {
    fn load_task(&self, heavy_cost: u32) -> Result<Task, Box<dyn Error>> {
        let text = fs::read_to_string(self)?;
        let task = parser::parse(&text, heavy_cost)?;
        Ok(task)
    }
}

pub trait Solve {
    fn solve(&self, method: Method) -> SolverOk;
}
