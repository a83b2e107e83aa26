//! Tests for the scripted `print` flow.

use clap::Parser;
use rewind_tui::{Cli, Command, report};

fn run(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let Some(Command::Print { cells, jump, json }) = cli.command else {
        panic!("expected print command");
    };
    let view = report::script(&cells, jump);
    if json {
        report::render_json(&view).expect("serializable view")
    } else {
        report::render_text(&view)
    }
}

#[test]
fn test_print_winning_game() {
    let out = run(&["rewind", "print", "0,4,1,3,2,5"]);
    assert!(out.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9"));
    assert!(out.contains("Winner: X"));
    assert!(!out.contains("Go to move #6"));
}

#[test]
fn test_print_branch_after_jump() {
    // Jumping back keeps the future visible until a new move is made.
    let out = run(&["rewind", "print", "0,4,1,3", "--jump", "1"]);
    assert!(out.contains("> Go to move #1\n"));
    assert!(out.contains("  Go to move #4\n"));
    assert!(out.contains("Next player: O"));
}

#[test]
fn test_print_json() {
    let out = run(&["rewind", "print", "4", "--json"]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["status_line"], "Next player: O");
    assert_eq!(value["moves"][1]["is_current"], true);
    assert_eq!(value["moves"][1]["played"]["player"], "X");
}
