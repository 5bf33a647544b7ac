use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["7", "50"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 50);
    let x = v["x_wins"].as_u64().unwrap();
    let o = v["o_wins"].as_u64().unwrap();
    let d = v["draws"].as_u64().unwrap();
    assert_eq!(x + o + d, 50);
    // every game takes between 5 and 9 moves
    let moves = v["moves"].as_u64().unwrap();
    assert!((5 * 50..=9 * 50).contains(&moves));
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["12345", "20"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn replay_reports_win() {
    let output = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(["replay", "0", "3", "1", "4", "2"])
        .output()
        .expect("failed to run tictactoe binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    assert!(stdout.contains("[X]|[X]|[X]"));
    assert_eq!(stdout.lines().last(), Some("X wins!"));
}

#[test]
fn replay_json_with_rejections() {
    let output = Command::new(env!("CARGO_BIN_EXE_tictactoe"))
        .args(["replay", "--json", "4", "4", "-1", "99", "0"])
        .output()
        .expect("failed to run tictactoe binary");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert_eq!(stderr.matches("rejected").count(), 3);
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["board"][4], "X");
    assert_eq!(v["board"][0], "O");
    assert_eq!(v["current_player"], "X");
    assert_eq!(v["phase"], "InProgress");
    assert!(v["winning_line"].is_null());
}
