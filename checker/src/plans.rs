use crate::table::normalize_name;
use crate::{CheckerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_PLAN: &str = "Default";

/// Advisory text per disease. Always holds a `"Default"` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ActionPlans {
    plans: BTreeMap<String, String>,
}

impl ActionPlans {
    pub fn new<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let plans: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (normalize_name(k.as_ref()), v.into()))
            .collect();
        if !plans.contains_key(DEFAULT_PLAN) {
            return Err(CheckerError::MissingDefaultPlan);
        }
        Ok(Self { plans })
    }

    /// Plan for `disease`, falling back to the default entry.
    pub fn lookup(&self, disease: &str) -> &str {
        self.plans
            .get(disease)
            .or_else(|| self.plans.get(DEFAULT_PLAN))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn has_specific(&self, disease: &str) -> bool {
        disease != DEFAULT_PLAN && self.plans.contains_key(disease)
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl TryFrom<BTreeMap<String, String>> for ActionPlans {
    type Error = CheckerError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self> {
        Self::new(map)
    }
}

impl From<ActionPlans> for BTreeMap<String, String> {
    fn from(plans: ActionPlans) -> Self {
        plans.plans
    }
}
