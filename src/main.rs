use std::error::Error;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

use clap::{App, Arg, ArgMatches};
use log::info;

use weighted_puzzle_solver::config::{Method, DEFAULT_HEAVY_COST};
use weighted_puzzle_solver::report::{self, Report};
use weighted_puzzle_solver::solver::SolverOk;
use weighted_puzzle_solver::{LoadTask, Solve, Task};

fn main() {
    env_logger::init();

    let matches = App::new("weighted-puzzle-solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves sliding tile puzzles with fixed and heavy tiles")
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .help("override the method from the input file (BFS, IDDFS, A*, IDA*, DFBnB)"),
        )
        .arg(
            Arg::with_name("heavy-cost")
                .long("heavy-cost")
                .takes_value(true)
                .help("cost of moving a heavy tile (default 30)"),
        )
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .conflicts_with("method")
                .help("solve using every method and print a comparison"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print nodes created and expanded at each depth"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("write the result to a file instead of stdout"),
        )
        .arg(Arg::with_name("input").required(true))
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let heavy_cost = match matches.value_of("heavy-cost") {
        Some(cost) => cost
            .parse()
            .map_err(|_| format!("Invalid heavy cost: '{}'", cost))?,
        None => DEFAULT_HEAVY_COST,
    };
    let path = matches.value_of("input").unwrap();

    let mut task = path
        .load_task(heavy_cost)
        .map_err(|err| format!("Can't load {}: {}", path, err))?;
    if let Some(method) = matches.value_of("method") {
        task.method = method.parse()?;
    }

    let out = if matches.is_present("all") {
        compare(&task, matches.is_present("stats"))
    } else {
        let (solution, elapsed) = timed_solve(&task, task.method);
        let mut out = Report::new(&solution, elapsed).to_string();
        if matches.is_present("stats") {
            out.push('\n');
            out.push_str(&solution.stats.to_string());
        }
        out
    };

    match matches.value_of("output") {
        Some(output) => fs::write(output, out)?,
        None => print!("{}", out),
    }
    Ok(())
}

fn compare(task: &Task, include_stats: bool) -> String {
    let runs: Vec<_> = Method::ALL
        .iter()
        .map(|&method| timed_solve(task, method))
        .collect();

    let mut out = report::comparison(&task.puzzle, &runs).to_string();
    if include_stats {
        for (solution, _) in &runs {
            out.push_str(&format!("\n{}:\n{}", solution.method, solution.stats));
        }
    }
    out
}

fn timed_solve(task: &Task, method: Method) -> (SolverOk, Duration) {
    info!("Solving using {}...", method);
    let started = Instant::now();
    let solution = task.puzzle.solve(method);
    let elapsed = started.elapsed();
    info!("{} finished in {:?}", method, elapsed);
    (solution, elapsed)
}
