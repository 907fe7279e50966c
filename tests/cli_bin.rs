use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_seabattle"))
}

#[test]
fn play_json_smoke() {
    let output = bin()
        .args(["play", "--seed", "7", "--json"])
        .output()
        .expect("failed to run seabattle binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert!(v["player1"]["shots"].is_u64());
    assert!(v["player2"]["ships_left"].is_u64());
}

#[test]
fn place_prints_full_fleet() {
    let output = bin()
        .args(["place", "--seed", "3"])
        .output()
        .expect("failed to run seabattle binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let ship_cells: usize = stdout
        .lines()
        .take(10)
        .map(|line| line.matches('S').count())
        .sum();
    assert_eq!(ship_cells, 20);
}

#[test]
fn suggest_reads_view_from_stdin() {
    let mut child = bin()
        .arg("suggest")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run seabattle binary");
    let blank = "_ _ _ _ _ _ _ _ _ _\n".repeat(10);
    child
        .stdin
        .take()
        .unwrap()
        .write_all(blank.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("Mode: Hunt"));
    assert!(stdout.contains("Suggested move"));
}
