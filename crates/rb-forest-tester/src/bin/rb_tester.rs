//! `rb-tester` — build, validate and tear down red-black trees.
//!
//! Usage:
//!   rb-tester [--nodes N] [--seed S] [--values a,b,c] [--rounds R]
//!             [--config FILE] [--print] [--json] [-v]
//!
//! Exits with status 1 when a run finds a broken invariant, 2 on bad
//! arguments.

use log::{error, LevelFilter};
use rb_forest_tester::cli::{parse_args, USAGE};
use rb_forest_tester::run;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn init_logging(verbosity: u8, print_log: bool) {
    let level = match verbosity {
        0 if print_log => LevelFilter::Info,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logging disabled: {e}");
    }
}

fn main() {
    let opts = match parse_args(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if opts.help {
        println!("{USAGE}");
        return;
    }
    init_logging(opts.verbosity, opts.config.print_log);

    match run(&opts.config) {
        Ok(reports) => {
            if opts.json {
                match serde_json::to_string_pretty(&reports) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            } else {
                for report in &reports {
                    let seed = report
                        .seed
                        .map_or_else(|| "fixed values".to_string(), |s| format!("seed {s}"));
                    println!(
                        "passed ({seed}): {} inserted, {} removed, height {}, black height {}",
                        report.inserted, report.removed, report.max_height, report.black_height
                    );
                }
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("failed: {e}");
            std::process::exit(1);
        }
    }
}
