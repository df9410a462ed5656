use crate::SymptomOrder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the static data comes from. `None` selects the built-in demonstration data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckerConfig {
    pub table: Option<PathBuf>,
    pub plans: Option<PathBuf>,
    #[serde(default)]
    pub order: SymptomOrder,
}

impl CheckerConfig {
    pub fn new(table: Option<PathBuf>, plans: Option<PathBuf>) -> Self {
        Self { table, plans, order: SymptomOrder::default() }
    }

    pub fn with_order(mut self, order: SymptomOrder) -> Self {
        self.order = order;
        self
    }
}
