use crate::config::Config;
use clap::Parser;
use log::debug;

pub fn config(args: &[&str]) -> Config {
    Config::try_parse_from(std::iter::once("gentestdata").chain(args.iter().copied()))
        .expect("valid test arguments")
}

// Runs the generator into memory and returns the stdout and stderr lines.
pub fn render(config: &Config) -> (Vec<String>, Vec<String>) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    crate::run(config, &mut stdout, &mut stderr).expect("in memory run");

    let stdout = String::from_utf8_lossy(&stdout).to_string();
    let stderr = String::from_utf8_lossy(&stderr).to_string();
    debug!("stdout: {}\nstderr: {}", stdout.trim(), stderr.trim());

    (split_lines(&stdout), split_lines(&stderr))
}

fn split_lines(output: &str) -> Vec<String> {
    output.lines().map(String::from).collect()
}
