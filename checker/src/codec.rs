//! Prime encoding of symptoms and square-free encoding of diseases.
//!
//! Every symptom gets a distinct prime; a disease is the product of the primes
//! of its symptoms. Because factorization is unique, `sqf(D) % prime(s) == 0`
//! holds exactly when `s` is one of `D`'s symptoms.

use crate::primes::generate_primes;
use crate::{CheckerError, Prime, Result, Sqf, SymptomTable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Order in which symptoms receive primes. The first symptom gets 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomOrder {
    /// Lexicographic by name (byte order).
    #[default]
    Name,
    /// Lowercased name, ties broken by [`SymptomOrder::Name`].
    CaseInsensitiveName,
}

impl SymptomOrder {
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Name => a.cmp(b),
            Self::CaseInsensitiveName => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
        }
    }
}

impl fmt::Display for SymptomOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::CaseInsensitiveName => "case-insensitive",
        })
    }
}

/// Accepts `name` and `case-insensitive`, plus the snake_case names used in JSON.
impl FromStr for SymptomOrder {
    type Err = CheckerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "case-insensitive" | "case_insensitive_name" => Ok(Self::CaseInsensitiveName),
            other => Err(CheckerError::InvalidArgument(format!(
                "unknown symptom order {other:?}, expected \"name\" or \"case-insensitive\""
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    pub order: SymptomOrder,
    pub symptom_to_prime: BTreeMap<String, Prime>,
    pub prime_to_symptom: BTreeMap<Prime, String>,
    pub disease_to_sqf: BTreeMap<String, Sqf>,
    /// Diseases sharing an SQF, in table order.
    pub sqf_to_diseases: BTreeMap<Sqf, Vec<String>>,
}

impl Encoding {
    pub fn build(table: &SymptomTable) -> Result<Self> {
        Self::build_with_order(table, SymptomOrder::default())
    }

    pub fn build_with_order(table: &SymptomTable, order: SymptomOrder) -> Result<Self> {
        let mut symptoms: Vec<&str> = table.symptom_universe().into_iter().collect();
        symptoms.sort_by(|a, b| order.compare(a, b));

        let primes = generate_primes(symptoms.len());
        let symptom_to_prime: BTreeMap<String, Prime> = symptoms
            .iter()
            .zip(&primes)
            .map(|(s, p)| (s.to_string(), *p))
            .collect();
        let prime_to_symptom: BTreeMap<Prime, String> =
            symptom_to_prime.iter().map(|(s, p)| (*p, s.clone())).collect();

        let mut disease_to_sqf = BTreeMap::new();
        let mut sqf_to_diseases: BTreeMap<Sqf, Vec<String>> = BTreeMap::new();
        for disease in table.diseases() {
            let mut sqf: Sqf = 1;
            for symptom in &disease.symptoms {
                let Some(&prime) = symptom_to_prime.get(symptom) else {
                    tracing::warn!(disease = %disease.name, symptom = %symptom, "symptom has no prime, skipped");
                    continue;
                };
                sqf = sqf
                    .checked_mul(Sqf::from(prime))
                    .ok_or_else(|| CheckerError::SqfOverflow { disease: disease.name.clone() })?;
            }
            if disease.symptoms.is_empty() {
                tracing::debug!(disease = %disease.name, "disease has no symptoms, sqf is 1");
            }
            disease_to_sqf.insert(disease.name.clone(), sqf);
            let bucket = sqf_to_diseases.entry(sqf).or_default();
            if !bucket.is_empty() {
                tracing::debug!(sqf = %sqf, disease = %disease.name, others = ?bucket, "sqf collision");
            }
            bucket.push(disease.name.clone());
        }

        tracing::info!(
            symptoms = symptom_to_prime.len(),
            diseases = disease_to_sqf.len(),
            distinct_sqfs = sqf_to_diseases.len(),
            "built prime encoding"
        );
        Ok(Self { order, symptom_to_prime, prime_to_symptom, disease_to_sqf, sqf_to_diseases })
    }

    pub fn prime_of(&self, symptom: &str) -> Option<Prime> {
        self.symptom_to_prime.get(symptom).copied()
    }

    pub fn symptom_of(&self, prime: Prime) -> Option<&str> {
        self.prime_to_symptom.get(&prime).map(String::as_str)
    }

    pub fn sqf_of(&self, disease: &str) -> Option<Sqf> {
        self.disease_to_sqf.get(disease).copied()
    }

    pub fn diseases_with(&self, sqf: Sqf) -> &[String] {
        self.sqf_to_diseases.get(&sqf).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Factor an SQF back into symptom names using the assigned primes.
    /// Returns `None` if any factor is left over that is not an assigned prime.
    pub fn decode(&self, sqf: Sqf) -> Option<Vec<&str>> {
        if sqf == 0 {
            return None;
        }
        let mut rest = sqf;
        let mut symptoms = Vec::new();
        for (&prime, symptom) in &self.prime_to_symptom {
            let p = Sqf::from(prime);
            if rest % p == 0 {
                rest /= p;
                symptoms.push(symptom.as_str());
                if rest % p == 0 {
                    // squared factor
                    return None;
                }
            }
            if rest == 1 {
                break;
            }
        }
        (rest == 1).then_some(symptoms)
    }

    pub fn symptom_count(&self) -> usize {
        self.symptom_to_prime.len()
    }
}
