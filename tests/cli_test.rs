use std::process::{Command, Output};

fn run(args: &[&str], log_level: Option<&str>) -> Output {
    let mut command: Command = Command::new(env!("CARGO_BIN_EXE_leibniz-pi"));
    command.args(args).env_remove("RUST_LOG");
    if let Some(level) = log_level {
        command.env("RUST_LOG", level);
    }
    command.output().expect("failed to run leibniz-pi binary")
}

fn assert_six_decimal_line(stdout: &str) {
    let line: &str = stdout
        .strip_suffix('\n')
        .expect("output ends with a newline");
    assert!(!line.contains('\n'), "expected a single line, got {:?}", stdout);

    let digits: &str = line.strip_prefix('-').unwrap_or(line);
    let (whole, fraction): (&str, &str) = digits.split_once('.').expect("decimal point");
    assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(fraction.len(), 6);
    assert!(fraction.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn four_terms_output_test() {
    let output: Output = run(&["--terms", "4", "--workers", "1"], None);
    let stdout: String = String::from_utf8_lossy(&output.stdout).into_owned();
    println!("Output: {:?}", stdout);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout, "2.895238\n");
}

#[test]
fn output_shape_test() {
    let output: Output = run(&["--terms", "100000", "--workers", "8"], None);
    let stdout: String = String::from_utf8_lossy(&output.stdout).into_owned();

    assert!(output.status.success());
    assert_six_decimal_line(&stdout);
    assert!(stdout.starts_with("3.14"));
}

#[test]
fn logging_stays_off_stdout_test() {
    let output: Output = run(&["--terms", "1003", "--workers", "10"], Some("debug"));
    let stdout: String = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr: String = String::from_utf8_lossy(&output.stderr).into_owned();
    println!("Stderr: {}", stderr);

    assert!(output.status.success());
    assert_six_decimal_line(&stdout);
    assert!(stderr.contains("trailing terms"));
}

#[test]
fn zero_workers_exit_test() {
    let output: Output = run(&["--terms", "10", "--workers", "0"], Some("error"));
    let stdout: String = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr: String = String::from_utf8_lossy(&output.stderr).into_owned();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.is_empty());
    assert_eq!(stderr.matches("invalid worker count: 0").count(), 1);
}

#[test]
fn oversized_workers_exit_test() {
    let output: Output = run(&["--terms", "0", "--workers", "18446744073709551615"], None);
    let stderr: String = String::from_utf8_lossy(&output.stderr).into_owned();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("too many workers"));
}
