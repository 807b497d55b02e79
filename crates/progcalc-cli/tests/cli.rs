use assert_cmd::Command;

fn progcalc() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_progcalc"));
    command.arg("--color").arg("never").env_remove("RUST_LOG");
    command
}

#[test]
fn convert_truncates_to_word_size() {
    let output = progcalc()
        .args(["convert", "300", "--word-size", "8"])
        .output()
        .expect("run convert");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("2C"));
    assert!(stdout.contains("00101100"));
    assert!(stdout.contains("054"));
}

#[test]
fn convert_rejects_digit_outside_base() {
    let output = progcalc()
        .args(["convert", "19", "--from", "oct"])
        .output()
        .expect("run convert");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("digit '9' is not valid in base OCT"));
}

#[test]
fn unknown_key_exits_with_one() {
    let output = progcalc()
        .args(["eval", "4", "sqrt"])
        .output()
        .expect("run eval");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("unknown key: sqrt"));
}

#[test]
fn rejected_keys_do_not_fail_eval() {
    let output = progcalc()
        .args(["eval", "--json", "5", "/", "0", "="])
        .output()
        .expect("run eval");
    assert!(output.status.success());
    let state: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json state");
    assert_eq!(state["pending_operation"], "DIV");
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("cannot divide by zero"));
}

#[test]
fn oversized_history_limit_in_config_exits_with_one() {
    let path = std::env::temp_dir().join(format!(
        "progcalc_cli_history_{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "history_limit = 9223372036854775807\n").expect("write config");
    let output = progcalc()
        .arg("--config")
        .arg(&path)
        .args(["eval", "1"])
        .output()
        .expect("run eval");
    std::fs::remove_file(&path).ok();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("exceeds the maximum of 10000"));
}

#[test]
fn unsupported_word_size_names_the_input() {
    let output = progcalc()
        .args(["eval", "--word-size", "wide", "1"])
        .output()
        .expect("run eval");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("invalid word size: wide"));
}
