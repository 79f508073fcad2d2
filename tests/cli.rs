use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_euler-trajectory"))
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("euler-trajectory-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

fn run(args: &[&str]) -> Output {
    bin().args(args).output().expect("Failed to execute command")
}

#[test]
fn default_run_writes_dat_file() {
    let path = scratch("default.dat");
    let output = run(&["-o", path.to_str().unwrap()]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Simulating projectile motion with params:"));
    assert!(stdout.contains("(vinit,theta0,dt)=(  10.00,  45.00,   0.01)"));
    assert!(stdout.contains("Projectile landed at x ≈ 10.324 meters"));

    let data = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = data.lines().collect();
    assert_eq!(lines[0], "# t   x   y   vx   vy");
    assert_eq!(lines[1], "0.000000 0.000000 0.000000 7.071068 7.071068");
    assert_eq!(lines.len(), 1 + 147);
    assert!(lines[1..].iter().all(|l| l.split_whitespace().count() == 5));
}

#[test]
fn vertical_launch_matches_hand_computation() {
    let path = scratch("vertical.dat");
    let output = run(&["-v", "10", "-a", "90", "-t", "1", "-o", path.to_str().unwrap()]);
    assert!(output.status.success());

    let data = fs::read_to_string(&path).unwrap();
    let heights: Vec<f64> = data
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().nth(2).unwrap().parse().unwrap())
        .collect();
    assert_eq!(heights, [0.0, 10.0, 10.2, 0.6, -18.8]);
}

#[test]
fn downward_launch_two_rows() {
    let path = scratch("down.dat");
    let output = run(&["-a", "-30", "-o", path.to_str().unwrap()]);
    assert!(output.status.success());
    let data = fs::read_to_string(&path).unwrap();
    assert_eq!(data.lines().count(), 3);
}

#[test]
fn zero_step_is_rejected_without_output() {
    for dt in ["0", "-1"] {
        let path = scratch(&format!("invalid{dt}.dat"));
        let output = run(&["-t", dt, "-o", path.to_str().unwrap()]);
        assert!(!output.status.success(), "dt={dt} must fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("time_step"), "stderr: {stderr}");
        assert!(!path.exists());
    }
}

#[test]
fn step_too_small_for_gravity_is_rejected() {
    let path = scratch("tiny-step.dat");
    let output = run(&["-t", "1e-20", "-o", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("time_step"), "stderr: {stderr}");
    assert!(!path.exists());
}

#[test]
fn help_exits_cleanly_without_simulating() {
    let output = run(&["-h"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--vinit"));
    assert!(!stdout.contains("Simulating"));
}

#[test]
fn unknown_flags_are_ignored() {
    let path = scratch("unknown.dat");
    let output = run(&["-x", "-v", "20", "--turbo", "-o", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(vinit,theta0,dt)=(  20.00,  45.00,   0.01)"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'-x'") && stderr.contains("'--turbo'"));
}

#[test]
fn identical_runs_identical_files() {
    let a = scratch("repeat_a.dat");
    let b = scratch("repeat_b.dat");
    for p in [&a, &b] {
        assert!(run(&["-v", "17", "-a", "33", "-t", "0.002", "-o", p.to_str().unwrap()]).status.success());
    }
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn unwritable_output_fails() {
    let path = scratch("missing-dir").join("trajectory.dat");
    let output = run(&["-o", path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot write trajectory"), "stderr: {stderr}");
}
