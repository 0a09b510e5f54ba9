use assert_cmd::prelude::*;
use std::process::Command;

/// Strips the last line - the time it took is never the same.
fn run(args: &[&str]) -> String {
    let output = Command::main_binary().unwrap().args(args).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stderr).unwrap(), "");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines: Vec<_> = stdout.lines().collect();
    let time = lines.pop().unwrap();
    assert!(time.ends_with(" seconds"), "last line was: {}", time);
    lines.join("\n") + "\n"
}

#[test]
fn run_one_move() {
    let output = r"3L
Num of nodes generated: 2
Path cost: 1
";
    assert_eq!(run(&["puzzles/one-move-2x2.txt"]), output);
}

#[test]
fn run_solved() {
    let output = r"No path
Num of nodes generated: 1
";
    assert_eq!(run(&["puzzles/solved-2x2.txt"]), output);
}

#[test]
fn run_unsolvable() {
    let output = r"No path
Num of nodes generated: 14
";
    assert_eq!(run(&["puzzles/unsolvable-2x2.txt"]), output);
}

#[test]
fn run_heavy() {
    let output = r"1L-3D-4R-5R-2U-1L-5D-4L-3U-5R-4D-2R-1U-4L-5L
Num of nodes generated: 100
Path cost: 73
";
    assert_eq!(run(&["puzzles/heavy-2x3.txt"]), output);
}

#[test]
fn run_method_override() {
    let output = r"2R-5D-4L-2U-1L-3D-2R-1U-5R-4D-1L-2L-3U
Num of nodes generated: 199
Path cost: 129
";
    assert_eq!(run(&["--method", "bfs", "puzzles/heavy-2x3.txt"]), output);
}

#[test]
fn run_heavy_cost() {
    // with heavy tiles as cheap as light ones the shortest path is also the cheapest
    let out = run(&["-m", "A*", "--heavy-cost", "1", "puzzles/heavy-2x3.txt"]);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0].split('-').count(), 13);
    assert_eq!(lines[2], "Path cost: 13");
}

#[test]
fn run_max_heavy_cost() {
    let output = r"1L-3D-4R-5R-2U-1L-5D-4L-3U-5R-4D-2R-1U-4L-5L
Num of nodes generated: 100
Path cost: 8589934603
";
    let args = ["--heavy-cost", "4294967295", "puzzles/heavy-2x3.txt"];
    assert_eq!(run(&args), output);
}

#[test]
fn run_heavy_cost_out_of_range() {
    Command::main_binary()
        .unwrap()
        .arg("--heavy-cost")
        .arg("4294967296")
        .arg("puzzles/heavy-2x3.txt")
        .assert()
        .failure()
        .stdout("")
        .stderr("Invalid heavy cost: '4294967296'\n");
}

#[test]
fn run_all() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--all")
        .arg("puzzles/fixed-3x3.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    for method in &["BFS", "IDDFS", "A*", "IDA*", "DFBnB"] {
        assert!(stdout.contains(method));
    }
    assert_eq!(stdout.matches("yes").count(), 5);
}

#[test]
fn run_stats() {
    let output = Command::main_binary()
        .unwrap()
        .arg("--stats")
        .arg("puzzles/one-move-2x2.txt")
        .output()
        .unwrap();
    assert!(output.status.success());

    // the table goes after the usual output
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("3L\nNum of nodes generated: 2\nPath cost: 1\n"));
    assert!(stdout.contains("Nodes created total: 2"));
    assert!(stdout.ends_with("1:             1              0\n"));
}

#[test]
fn run_unsupported_method() {
    Command::main_binary()
        .unwrap()
        .arg("--method")
        .arg("dijkstra")
        .arg("puzzles/one-move-2x2.txt")
        .assert()
        .failure()
        .stdout("")
        .stderr("Unsupported search algorithm: 'dijkstra'\n");
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("puzzles/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_args() {
    // doesn't check stderr, that's clap's usage message
    Command::main_binary()
        .unwrap()
        .arg("--all")
        .arg("--method")
        .arg("bfs")
        .arg("puzzles/one-move-2x2.txt")
        .assert()
        .failure()
        .stdout("");
}
