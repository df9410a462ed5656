use crate::render;
use anyhow::Result;
use checker::SymptomChecker;
use std::io::{BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Enter symptom prime numbers (comma-separated, e.g., 2, 5, 11): ";

/// Interactive loop over `input`, writing to `out`. Ends on "no" or end of input.
pub struct Repl<'a, R, W> {
    checker: &'a SymptomChecker,
    input: R,
    out: W,
    graph_dir: Option<PathBuf>,
    graphs_written: usize,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(checker: &'a SymptomChecker, input: R, out: W) -> Self {
        Self { checker, input, out, graph_dir: None, graphs_written: 0 }
    }

    pub fn with_graph_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.graph_dir = dir;
        self
    }

    pub fn run(mut self) -> Result<()> {
        render::banner(&mut self.out)?;
        render::legend(&mut self.out, self.checker.encoding())?;

        loop {
            render::rule(&mut self.out, '-')?;
            let Some(line) = self.prompt(PROMPT)? else { break };
            let query = self.checker.parse(&line);

            if query.is_blank() {
                writeln!(self.out, "No input provided.")?;
                if !self.confirm("\nTry again? (yes/no): ")? {
                    break;
                }
                continue;
            }

            render::warnings(&mut self.out, &query.warnings)?;
            if query.is_empty() {
                writeln!(self.out, "No valid symptom primes provided. Cannot proceed with analysis.")?;
                if !self.confirm("\nTry again? (yes/no): ")? {
                    break;
                }
                continue;
            }

            let report = self.checker.check(&query);
            writeln!(self.out, "\nProcessing symptoms: {}", report.symptoms.join(", "))?;
            writeln!(self.out, "Corresponding prime numbers: {:?}", report.primes)?;
            render::report(&mut self.out, &report)?;
            self.write_graph(&report)?;

            render::rule(&mut self.out, '-')?;
            if !self.confirm("\nAnalyze another set of symptoms? (yes/no): ")? {
                writeln!(self.out, "\nExiting symptom checker. Remember this is not medical advice.")?;
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_graph(&mut self, report: &checker::Report) -> Result<()> {
        let Some(dir) = &self.graph_dir else { return Ok(()) };
        let Some(graph) = self.checker.graph(report) else { return Ok(()) };
        std::fs::create_dir_all(dir)?;
        self.graphs_written += 1;
        let path = dir.join(format!("graph-{}.svg", self.graphs_written));
        match std::fs::write(&path, graph.to_svg()) {
            Ok(()) => writeln!(self.out, "\nConnections graph written to {}", path.display())?,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not write graph");
                writeln!(self.out, "\nError generating visualization: {e}")?;
            }
        }
        Ok(())
    }

    /// Print `text` and read one line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, text: &str) -> Result<bool> {
        Ok(self.prompt(text)?.is_some_and(|answer| answer.eq_ignore_ascii_case("yes")))
    }
}
