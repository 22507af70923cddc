// Command line checker for South African identity numbers

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use sa_id::{
    models::{Citizenship, Gender, IdentifierFields, ValidationVerdict},
    utils::mask,
    validation::{verdict_message, INVALID_ID_TITLE},
    IdNumberValidator,
};
use serde::Serialize;

/// Structurally validate South African identity numbers.
///
/// Checks the format, birth date ranges, sequence number and citizenship
/// digit. The trailing check digit is not verified.
#[derive(Parser, Debug)]
#[command(name = "sa-id-check", version, about)]
struct Cli {
    /// Identity numbers to check. Read one per line from stdin when omitted.
    ids: Vec<String>,

    /// Print one JSON object per number instead of a report.
    #[arg(long)]
    json: bool,

    /// Log rejected numbers and their violations (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report {
    id: String,
    valid: bool,
    #[serde(flatten)]
    verdict: ValidationVerdict,
    message: Option<String>,
    fields: Option<IdentifierFields>,
    gender: Option<Gender>,
    citizenship: Option<Citizenship>,
}

fn report(validator: &IdNumberValidator, raw: &str) -> Report {
    let verdict = validator.classify(raw);
    // Present whenever the format gate passed, even if a field is out of range.
    let fields = validator.parse(raw).ok();
    Report {
        id: mask(raw),
        valid: verdict.is_valid(),
        verdict,
        message: verdict_message(&verdict),
        fields,
        gender: fields.map(|f| f.gender()),
        citizenship: fields.and_then(|f| f.citizenship()),
    }
}

fn print_report(report: &Report) {
    println!("{}: {}", report.id, if report.valid { "VALID" } else { "INVALID" });
    if let Some(fields) = &report.fields {
        println!(
            "  Birth date: {:02}-{:02}-{:02} (YY-MM-DD)",
            fields.year_digits(),
            fields.month(),
            fields.day()
        );
        println!("  Sequence number: {:04}", fields.sequence_gender());
    }
    if let Some(gender) = report.gender {
        println!("  Gender: {:?}", gender);
    }
    if let Some(citizenship) = report.citizenship {
        println!("  Citizenship: {:?}", citizenship);
    }
    if let Some(message) = &report.message {
        println!("  {}: {}", INVALID_ID_TITLE, message);
    }
}

/// One ID per line, trimmed, blank lines skipped.
fn read_ids<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            ids.push(trimmed.to_string());
        }
    }
    Ok(ids)
}

fn all_valid(reports: &[Report]) -> bool {
    reports.iter().all(|report| report.valid)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let ids = if cli.ids.is_empty() {
        match read_ids(io::stdin().lock()) {
            Ok(ids) => ids,
            Err(err) => {
                eprintln!("Error reading identity numbers from stdin: {}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.ids
    };

    let validator = IdNumberValidator::new();
    let reports: Vec<Report> = ids.iter().map(|raw| report(&validator, raw)).collect();

    for report in &reports {
        if cli.json {
            match serde_json::to_string(report) {
                Ok(line) => println!("{}", line),
                Err(err) => {
                    eprintln!("Error serializing report: {}", err);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            print_report(report);
        }
    }

    if all_valid(&reports) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
