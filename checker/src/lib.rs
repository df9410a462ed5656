pub mod builtin;
pub mod checker;
pub mod codec;
pub mod config;
pub mod error;
pub mod graph;
pub mod matcher;
pub mod persist;
pub mod plans;
pub mod primes;
pub mod query;
pub mod rank;
pub mod table;

use serde::{Deserialize, Serialize};

pub use checker::{RankedCondition, Report, ReportStatus, SymptomChecker};
pub use codec::{Encoding, SymptomOrder};
pub use error::{CheckerError, Result};
pub use plans::ActionPlans;
pub use query::{ParsedQuery, QueryWarning};
pub use table::SymptomTable;

/// A prime assigned to exactly one symptom.
pub type Prime = u64;
/// Square-free product of the primes of a disease's symptoms.
pub type Sqf = u128;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub disease: String,
    pub count: u32,
}

pub const DISCLAIMER: &str = "\
This tool is for informational and demonstrational purposes ONLY.
It is NOT a substitute for professional medical advice, diagnosis, or treatment.
ALWAYS seek the advice of your physician or other qualified health provider
with any questions you may have regarding a medical condition.
NEVER disregard professional medical advice or delay in seeking it
because of something you have read or interpreted from this tool.
If you think you may have a medical emergency, call your doctor,
go to the emergency department, or call 911 immediately.";
