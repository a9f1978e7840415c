mod common;

use common::cli::DataRoot;
use common::fixtures::{RunFixture, timing_log};
use std::fs;

#[test]
fn e2e_log_file_receives_plain_events() {
    let root = DataRoot::new();
    root.write(
        "fib.log",
        &timing_log(&[RunFixture::steady("Fibonacci", 20, 0.1, 30)]),
    );
    let log_file = root.path().join("run.log");

    root.command()
        .env_remove("NO_COLOR")
        .arg("-v")
        .arg("--log-file")
        .arg(&log_file)
        .args(["runs", "fib.log"])
        .assert()
        .success();

    let contents = fs::read_to_string(&log_file).expect("log file written");
    assert!(contents.contains("Extracted runs"), "log file: {contents}");
    assert!(contents.contains("runs=1"), "log file: {contents}");
    assert!(!contents.contains('\u{1b}'), "ANSI escapes in: {contents}");
}

#[test]
fn e2e_log_file_appends_across_runs() {
    let root = DataRoot::new();
    root.write(
        "fib.log",
        &timing_log(&[RunFixture::steady("Fibonacci", 20, 0.1, 30)]),
    );
    let log_file = root.path().join("run.log");
    let log_arg = log_file.to_str().expect("utf-8 path");

    for _ in 0..2 {
        root.run(["-v", "--log-file", log_arg, "runs", "fib.log"])
            .success();
    }

    let contents = fs::read_to_string(&log_file).expect("log file written");
    assert_eq!(contents.matches("Extracted runs").count(), 2);
}

#[test]
fn e2e_default_level_keeps_info_out_of_log_file() {
    let root = DataRoot::new();
    root.write(
        "fib.log",
        &timing_log(&[RunFixture::steady("Fibonacci", 20, 0.1, 30)]),
    );
    let log_file = root.path().join("quiet.log");
    let log_arg = log_file.to_str().expect("utf-8 path");

    root.run(["--log-file", log_arg, "runs", "fib.log"]).success();

    let contents = fs::read_to_string(&log_file).expect("log file created");
    assert!(!contents.contains("Extracted runs"));
}
