//! Argument parsing for `rb-tester`.
//!
//! A `--config FILE` is loaded first; every other flag then overrides the
//! loaded values regardless of position.

use std::path::Path;

use crate::config::{ConfigError, TesterConfig};

pub const USAGE: &str = "\
Usage: rb-tester [OPTIONS]

Options:
  --nodes N          distinct random values per round (default 1000)
  --seed S           PRNG seed (default: drawn from the OS)
  --values a,b,c     insert these values instead of random ones
  --rounds R         number of rounds (default 1)
  --config FILE      load options from a JSON file
  --print            dump the tree after every step
  --json             print the run reports as JSON
  -v                 more logging (repeatable)
  -h, --help         show this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: TesterConfig,
    pub json: bool,
    pub verbosity: u8,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut opts = CliOptions::default();
    if let Some(pos) = args.iter().position(|a| a == "--config") {
        let path = args
            .get(pos + 1)
            .ok_or_else(|| ConfigError::MissingValue("--config".to_string()))?;
        opts.config = TesterConfig::from_json_file(Path::new(path))?;
    }

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                i += 1;
            }
            "--nodes" => {
                opts.config.nodes = parse_number(flag, value_of(&args, i)?)?;
                i += 1;
            }
            "--seed" => {
                opts.config.seed = Some(parse_number(flag, value_of(&args, i)?)?);
                i += 1;
            }
            "--rounds" => {
                opts.config.rounds = parse_number(flag, value_of(&args, i)?)?;
                i += 1;
            }
            "--values" => {
                let list = value_of(&args, i)?;
                let values = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| parse_number(flag, s))
                    .collect::<Result<Vec<i64>, _>>()?;
                opts.config.values = Some(values);
                i += 1;
            }
            "--print" => opts.config.print_log = true,
            "--json" => opts.json = true,
            "-h" | "--help" => opts.help = true,
            _ if flag.len() > 1 && flag.starts_with('-') && flag[1..].chars().all(|c| c == 'v') => {
                opts.verbosity = opts.verbosity.saturating_add((flag.len() - 1) as u8);
            }
            _ => return Err(ConfigError::UnknownFlag(flag.to_string())),
        }
        i += 1;
    }
    Ok(opts)
}

fn value_of(args: &[String], i: usize) -> Result<&str, ConfigError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(args[i].clone()))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
