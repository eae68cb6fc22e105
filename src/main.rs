use std::{env, process::ExitCode, time::Instant};

use bantam::{
    format_error,
    harness::{run_cases, Outcome, TestReport, BANTAM_CASES},
    parse,
};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        run_suite()
    } else {
        parse_sources(&args)
    }
}

fn run_suite() -> ExitCode {
    let start = Instant::now();
    let report = run_cases(BANTAM_CASES);
    tracing::info!(elapsed = ?start.elapsed(), "ran {} cases", report.total());

    print_report(&report);

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &TestReport) {
    for (_, outcome) in report.failures() {
        match outcome {
            Outcome::Mismatch { expected, actual } => {
                println!("[FAIL] Expected: {}", expected);
                println!("         Actual: {}", actual);
            }
            Outcome::Failed { expected, error } => {
                println!("[FAIL] Expected: {}", expected);
                println!("          Error: {}", error);
            }
            Outcome::Passed => {}
        }
    }

    if report.all_passed() {
        println!("Passed all {} tests.", report.passed());
    } else {
        println!("----");
        println!("Failed {} out of {} tests.", report.failed(), report.total());
    }
}

fn parse_sources(sources: &[String]) -> ExitCode {
    let mut code = ExitCode::SUCCESS;

    for source in sources {
        match parse(source) {
            Ok(expr) => println!("{}", expr),
            Err(error) => {
                println!("{}", format_error(&error));
                code = ExitCode::FAILURE;
            }
        }
    }

    code
}
