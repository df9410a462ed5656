//! The two HTML pages: the symptom form and the results.

use checker::graph::escape_xml as escape;
use checker::{Report, ReportStatus, SymptomChecker};
use std::fmt;

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:2em auto;padding:0 1em}\
.disclaimer{background:#fff4e5;border:1px solid #f0b37e;padding:1em;white-space:pre-line}\
.symptoms{columns:3}.result{border-bottom:1px solid #ddd;padding:.5em 0}.warning{color:#a94442}";

/// Shared document shell around a page body.
struct Page<'a, B> {
    title: &'a str,
    body: B,
}

impl<B: fmt::Display> fmt::Display for Page<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
        writeln!(f, "<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>", escape(self.title))?;
        write!(f, "{}", self.body)?;
        writeln!(f, "</body>\n</html>")
    }
}

struct IndexBody<'a>(&'a SymptomChecker);

impl fmt::Display for IndexBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<h1>Symptom Checker</h1>")?;
        writeln!(f, "<p class=\"disclaimer\">{}</p>", escape(checker::DISCLAIMER))?;
        writeln!(f, "<form method=\"post\" action=\"/analyze\">\n<div class=\"symptoms\">")?;
        for (symptom, prime) in &self.0.encoding().symptom_to_prime {
            writeln!(
                f,
                "<label><input type=\"checkbox\" name=\"symptoms\" value=\"{prime}\"> {}</label><br>",
                escape(symptom)
            )?;
        }
        writeln!(f, "</div>\n<button type=\"submit\">Analyze</button>\n</form>")
    }
}

struct ResultsBody<'a> {
    report: &'a Report,
    graph_svg: Option<&'a str>,
}

impl fmt::Display for ResultsBody<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "<h1>Results</h1>")?;
        if !report.warnings.is_empty() {
            let joined: Vec<String> = report.warnings.iter().map(|w| escape(&w.to_string())).collect();
            writeln!(f, "<p class=\"warning\">Ignored invalid inputs: {}</p>", joined.join(", "))?;
        }
        writeln!(f, "<h2>Selected symptoms</h2>\n<ul>")?;
        for symptom in &report.symptoms {
            writeln!(f, "<li>{}</li>", escape(symptom))?;
        }
        writeln!(f, "</ul>")?;

        if report.status == ReportStatus::Matched {
            writeln!(f, "<h2>Potential conditions</h2>")?;
            for result in &report.results {
                writeln!(
                    f,
                    "<div class=\"result\"><h3>{}</h3><p>Matches {} symptom(s) (SQF: {})</p><p>{}</p></div>",
                    escape(&result.name),
                    result.count,
                    result.sqf,
                    escape(&result.action)
                )?;
            }
        } else {
            writeln!(f, "<p>{}</p>", escape(&report.summary()))?;
        }

        if let Some(svg) = self.graph_svg {
            writeln!(f, "<h2>Connections</h2>\n<div class=\"graph\">{svg}</div>")?;
        }
        writeln!(f, "<p class=\"disclaimer\">{}</p>", escape(checker::DISCLAIMER))?;
        writeln!(f, "<p><a href=\"/\">Check other symptoms</a></p>")
    }
}

/// Symptom checkboxes, alphabetical, each carrying its prime as value.
pub fn index(checker: &SymptomChecker) -> String {
    Page { title: "Symptom Checker", body: IndexBody(checker) }.to_string()
}

pub fn results(report: &Report, graph_svg: Option<&str>) -> String {
    Page { title: "Symptom Checker - Results", body: ResultsBody { report, graph_svg } }.to_string()
}
