//! # PadCalc CLI Application
//!
//! Interactive console front end for hole/pad sizing. Prompts for the
//! pin dimensions (or a target hole size), runs the derivation, and
//! prints the result table in all three units plus a JSON report.
//!
//! All validation lives in `padcalc_core`; this layer only gathers
//! input strings and renders output.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use padcalc_core::errors::CalcResult;
use padcalc_core::measurement::Measurement;
use padcalc_core::rect_calc::{calculate, RectCalc, RectInput};
use padcalc_core::report::Report;

/// Read one trimmed line, `None` on EOF or empty input.
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Prompt for a measurement like `3.5 mm` (a bare number means inches).
/// Re-prompts on parse errors; `None` means the field was skipped.
fn prompt_measurement(text: &str) -> Option<Measurement> {
    loop {
        let line = prompt(text)?;
        match line.parse::<Measurement>() {
            Ok(meas) => return Some(meas),
            Err(e) => eprintln!("  {e}"),
        }
    }
}

fn gather_input() -> RectInput {
    let length = prompt_measurement("Pin length (e.g. \"3.5 mm\", blank to size from a hole): ");

    if let Some(length) = length {
        let width = prompt_measurement("Pin width (blank for a square pin): ");
        let input = match width {
            Some(width) => RectInput::from_dimensions(length, width),
            None => RectInput::square(length),
        };
        match prompt_measurement("Target hole size to check against (blank to skip): ") {
            Some(hole) => input.with_hole(hole),
            None => input,
        }
    } else {
        match prompt_measurement("Target hole size: ") {
            Some(hole) => RectInput::from_hole(hole),
            None => RectInput::default(),
        }
    }
}

fn print_table(report: &Report) {
    println!("═══════════════════════════════════════════════════════════════════════");
    println!("  RECTANGULAR PIN HOLE/PAD RESULTS");
    println!("═══════════════════════════════════════════════════════════════════════");
    println!();
    print!("{:<6}", "Unit");
    for (label, _) in report.rows[0].cells() {
        print!("{label:>13}");
    }
    println!();

    for row in &report.rows {
        let places = row.unit.places() as usize;
        print!("{:<6}", row.unit.code());
        for (_, value) in row.cells() {
            print!("{value:>13.places$}");
        }
        println!();
    }
    println!();
    println!("═══════════════════════════════════════════════════════════════════════");
}

fn run() -> CalcResult<RectCalc> {
    let input = gather_input();
    calculate(&input)
}

fn main() -> ExitCode {
    println!("PadCalc - Rectangular Pin Hole/Pad Calculator");
    println!("=============================================");
    println!();

    match run() {
        Ok(result) => {
            println!();
            print_table(&result.report());

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result.report()) {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}
