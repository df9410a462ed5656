use crate::config::CheckerConfig;
use crate::graph::GraphLayout;
use crate::matcher::match_counts;
use crate::query::{ParsedQuery, QueryWarning};
use crate::rank::rank;
use crate::{builtin, persist, ActionPlans, Encoding, Prime, Sqf, SymptomOrder, SymptomTable};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;

/// Table, encoding and action plans, built once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SymptomChecker {
    table: SymptomTable,
    encoding: Encoding,
    plans: ActionPlans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// No valid symptom prime survived validation.
    EmptyQuery,
    NoMatch,
    Matched,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCondition {
    pub name: String,
    pub count: u32,
    pub sqf: Sqf,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub status: ReportStatus,
    pub symptoms: Vec<String>,
    pub primes: Vec<Prime>,
    pub warnings: Vec<QueryWarning>,
    pub results: Vec<RankedCondition>,
}

impl SymptomChecker {
    pub fn new(table: SymptomTable, plans: ActionPlans) -> crate::Result<Self> {
        Self::with_order(table, plans, SymptomOrder::default())
    }

    pub fn with_order(table: SymptomTable, plans: ActionPlans, order: SymptomOrder) -> crate::Result<Self> {
        let encoding = Encoding::build_with_order(&table, order)?;
        Ok(Self { table, encoding, plans })
    }

    pub fn builtin() -> crate::Result<Self> {
        Self::new(builtin::table()?, builtin::action_plans()?)
    }

    /// Load from the configured files, using the demonstration data for anything not given.
    pub fn from_config(config: &CheckerConfig) -> Result<Self> {
        let table = match &config.table {
            Some(path) => persist::load_table(path)?,
            None => builtin::table()?,
        };
        let plans = match &config.plans {
            Some(path) => persist::load_plans(path)?,
            None => builtin::action_plans()?,
        };
        Ok(Self::with_order(table, plans, config.order)?)
    }

    pub fn table(&self) -> &SymptomTable {
        &self.table
    }

    pub fn encoding(&self) -> &Encoding {
        &self.encoding
    }

    pub fn plans(&self) -> &ActionPlans {
        &self.plans
    }

    pub fn parse(&self, raw: &str) -> ParsedQuery {
        ParsedQuery::parse(raw, &self.encoding)
    }

    pub fn check_str(&self, raw: &str) -> Report {
        self.check(&self.parse(raw))
    }

    pub fn check(&self, query: &ParsedQuery) -> Report {
        let symptoms = query.symptom_names(&self.encoding).into_iter().map(str::to_string).collect();
        let primes: Vec<Prime> = query.primes.iter().copied().collect();
        let mut report = Report {
            status: ReportStatus::EmptyQuery,
            symptoms,
            primes,
            warnings: query.warnings.clone(),
            results: Vec::new(),
        };
        if query.is_empty() {
            return report;
        }

        let matches = match_counts(&query.primes, &self.encoding.disease_to_sqf);
        report.results = rank(matches)
            .into_iter()
            .map(|m| RankedCondition {
                sqf: self.encoding.sqf_of(&m.disease).unwrap_or(1),
                action: self.plans.lookup(&m.disease).to_string(),
                name: m.disease,
                count: m.count,
            })
            .collect();
        report.status = if report.results.is_empty() { ReportStatus::NoMatch } else { ReportStatus::Matched };
        tracing::debug!(primes = ?report.primes, matches = report.results.len(), "checked query");
        report
    }

    /// Bipartite layout for a report, or `None` when nothing matched.
    pub fn graph(&self, report: &Report) -> Option<GraphLayout> {
        GraphLayout::build(&report.primes, &report.matched_sqfs(), &self.encoding)
    }
}

impl Report {
    /// Distinct SQFs of the matched diseases, ascending.
    pub fn matched_sqfs(&self) -> Vec<Sqf> {
        self.results.iter().map(|r| r.sqf).collect::<BTreeSet<_>>().into_iter().collect()
    }

    pub fn summary(&self) -> String {
        match self.status {
            ReportStatus::EmptyQuery => "No valid symptom primes provided.".to_string(),
            ReportStatus::NoMatch => {
                "Based on the input symptoms, no matching conditions were found in the dataset.".to_string()
            }
            ReportStatus::Matched => {
                let names: Vec<&str> = self.results.iter().map(|r| r.name.as_str()).collect();
                format!(
                    "Based on the symptoms: {}\nPotential conditions to discuss with a healthcare professional include: {}.",
                    self.symptoms.join(", "),
                    names.join(", ")
                )
            }
        }
    }
}
