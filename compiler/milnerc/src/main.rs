//! Milner CLI
//!
//! Infers and prints the type of each sample program.

use milner_ir::{ExprArena, StringInterner};
use milnerc::config::DriverConfig;
use milnerc::report::run_samples;
use milnerc::samples::build_samples;

fn main() {
    let config = match DriverConfig::parse(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if config.help {
        print_usage();
        return;
    }

    milnerc::init_tracing(config.trace);

    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let samples = build_samples(&mut arena, &interner);

    let reports = run_samples(&arena, &interner, &samples, &config);
    if reports.is_empty() {
        eprintln!("no sample matches the filter");
        std::process::exit(1);
    }

    for report in &reports {
        println!("{}", report.display(config.verbose));
    }
}

fn print_usage() {
    eprintln!("Usage: milner [options]");
    eprintln!();
    eprintln!("Infers the type of each sample program under the standard environment.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --filter=<name>   Only run samples whose name contains <name>");
    eprintln!("  --raw             Print variables by id instead of renumbering from `a`");
    eprintln!("  --trace           Show inference as a tree of spans on stderr");
    eprintln!("  -v, --verbose     Print each expression before its type");
    eprintln!("  -h, --help        Show this help");
}
