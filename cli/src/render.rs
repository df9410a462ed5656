use checker::{Encoding, Report, ReportStatus};
use std::io::{self, Write};

pub const RULE_WIDTH: usize = 70;
const ITEMS_PER_LINE: usize = 2;

pub fn rule(out: &mut impl Write, c: char) -> io::Result<()> {
    writeln!(out, "{}", c.to_string().repeat(RULE_WIDTH))
}

pub fn banner(out: &mut impl Write) -> io::Result<()> {
    rule(out, '=')?;
    writeln!(out, "          Symptom Checker (Prime Number Mapping - Demo)")?;
    writeln!(out, "              Includes Common and RARE Disease Data")?;
    rule(out, '=')?;
    writeln!(out, "\n*** DISCLAIMER ***")?;
    writeln!(out, "{}", checker::DISCLAIMER)?;
    rule(out, '=')
}

/// Symptom primes two per line, then every SQF with the diseases sharing it.
pub fn legend(out: &mut impl Write, encoding: &Encoding) -> io::Result<()> {
    writeln!(out)?;
    rule(out, '=')?;
    writeln!(out, "                    LEGEND / HASH MAP")?;
    rule(out, '=')?;
    writeln!(out, "\n--- Symptom Primes ---")?;
    let width = encoding.prime_to_symptom.values().map(|s| s.chars().count()).max().unwrap_or(10);
    let entries: Vec<_> = encoding.prime_to_symptom.iter().collect();
    for chunk in entries.chunks(ITEMS_PER_LINE) {
        let mut line = String::new();
        for (prime, symptom) in chunk {
            line.push_str(&format!("  {prime:<5} -> {symptom:<width$}  "));
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    writeln!(out, "\n--- Disease Square-Free Integers (SQF) ---")?;
    for (sqf, diseases) in &encoding.sqf_to_diseases {
        writeln!(out, "  {sqf:<15} -> {}", diseases.join(", "))?;
    }
    rule(out, '=')?;
    writeln!(out)
}

pub fn report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    if report.status != ReportStatus::Matched {
        return writeln!(out, "\n{}", report.summary());
    }
    writeln!(out)?;
    rule(out, '=')?;
    writeln!(out, "                          RESULTS & ACTIONS")?;
    rule(out, '=')?;
    writeln!(out, "\n{}\n", report.summary())?;
    writeln!(out, "--- Details & Suggested Actions (Not Medical Advice) ---")?;
    for result in &report.results {
        writeln!(out, "\n* {}", result.name)?;
        writeln!(out, "  Matches {} symptom(s) (SQF: {})", result.count, result.sqf)?;
        writeln!(out, "  {}", result.action)?;
    }
    writeln!(out, "---")
}

pub fn warnings(out: &mut impl Write, report_warnings: &[checker::QueryWarning]) -> io::Result<()> {
    if report_warnings.is_empty() {
        return Ok(());
    }
    let joined: Vec<String> = report_warnings.iter().map(ToString::to_string).collect();
    writeln!(out, "\nWarning: The following inputs are invalid: {}", joined.join(", "))
}
