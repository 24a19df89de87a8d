use std::process::Command;

use anyhow::{Context, Result, bail};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let task = args.next().unwrap_or_else(|| "help".to_string());
    match task.as_str() {
        "check" => check(args.collect()),
        "lint" => lint(),
        "test" => test(args.collect()),
        _ => {
            print_help();
            Ok(())
        }
    }
}

/// Full static pipeline: lints, then every test including the
/// `compile_fail` doc tests that reject misuse of the variadic protocol.
fn check(args: Vec<String>) -> Result<()> {
    lint()?;
    test(args)
}

fn lint() -> Result<()> {
    let mut cmd = cargo();
    cmd.args(["clippy", "-p", "biscuit-types", "--all-targets", "--all-features"])
        .args(["--", "-D", "warnings"]);
    run(&mut cmd, "lint")
}

fn test(args: Vec<String>) -> Result<()> {
    let with_log = args.iter().any(|a| a == "--log");
    let mut cmd = cargo();
    cmd.args(["test", "-p", "biscuit-types"]);
    if with_log {
        cmd.args(["--features", "log,std"]);
    }
    run(&mut cmd, "test")?;

    let mut doc = cargo();
    doc.args(["test", "-p", "biscuit-types", "--doc"]);
    run(&mut doc, "doc tests")
}

fn cargo() -> Command {
    Command::new(std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()))
}

fn run(cmd: &mut Command, name: &str) -> Result<()> {
    println!("[xtask] {}: {:?}", name, cmd);
    let status = cmd.status().with_context(|| format!("failed to run {}", name))?;
    if !status.success() {
        bail!("{} failed with status {:?}", name, status);
    }
    Ok(())
}

fn print_help() {
    println!("xtask usage:");
    println!("  cargo run -p xtask -- check [--log]");
    println!("  cargo run -p xtask -- lint");
    println!("  cargo run -p xtask -- test [--log]");
}
