use crate::table::TableFile;
use crate::{ActionPlans, Encoding, Prime, Sqf, SymptomOrder, SymptomTable};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::Path;

/// Exported symptom primes and disease SQFs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendFile {
    pub created_at: String,
    pub version: u32,
    pub order: SymptomOrder,
    pub symptom_to_prime: BTreeMap<String, Prime>,
    pub disease_to_sqf: BTreeMap<String, Sqf>,
    pub sqf_to_diseases: BTreeMap<Sqf, Vec<String>>,
}

impl LegendFile {
    pub fn new(encoding: &Encoding, created_at: String) -> Self {
        Self {
            created_at,
            version: 1,
            order: encoding.order,
            symptom_to_prime: encoding.symptom_to_prime.clone(),
            disease_to_sqf: encoding.disease_to_sqf.clone(),
            sqf_to_diseases: encoding.sqf_to_diseases.clone(),
        }
    }
}

fn read_string(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let json = serde_json::to_string_pretty(value)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<SymptomTable> {
    let path = path.as_ref();
    let file: TableFile =
        serde_json::from_str(&read_string(path)?).with_context(|| format!("parsing table {}", path.display()))?;
    let table = SymptomTable::from_file(file).with_context(|| format!("invalid table {}", path.display()))?;
    tracing::info!(path = %path.display(), diseases = table.len(), "loaded symptom table");
    Ok(table)
}

pub fn save_table<P: AsRef<Path>>(path: P, table: &SymptomTable) -> Result<()> {
    write_json(path.as_ref(), &table.to_file())
}

pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<ActionPlans> {
    let path = path.as_ref();
    let plans: ActionPlans =
        serde_json::from_str(&read_string(path)?).with_context(|| format!("parsing action plans {}", path.display()))?;
    tracing::info!(path = %path.display(), plans = plans.len(), "loaded action plans");
    Ok(plans)
}

pub fn save_plans<P: AsRef<Path>>(path: P, plans: &ActionPlans) -> Result<()> {
    write_json(path.as_ref(), plans)
}

pub fn save_legend<P: AsRef<Path>>(path: P, legend: &LegendFile) -> Result<()> {
    write_json(path.as_ref(), legend)
}

pub fn load_legend<P: AsRef<Path>>(path: P) -> Result<LegendFile> {
    let path = path.as_ref();
    let legend = serde_json::from_str(&read_string(path)?)?;
    Ok(legend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use tempfile::tempdir;

    #[test]
    fn table_and_plans_survive_a_file() {
        let dir = tempdir().unwrap();
        let table = builtin::table().unwrap();
        let plans = builtin::action_plans().unwrap();
        save_table(dir.path().join("table.json"), &table).unwrap();
        save_plans(dir.path().join("nested/plans.json"), &plans).unwrap();
        assert_eq!(load_table(dir.path().join("table.json")).unwrap(), table);
        assert_eq!(load_plans(dir.path().join("nested/plans.json")).unwrap(), plans);
    }

    #[test]
    fn legend_keeps_sqf_collisions() {
        let dir = tempdir().unwrap();
        let table = SymptomTable::from_sets([("A", vec!["x", "y"]), ("B", vec!["y", "x"])]).unwrap();
        let enc = Encoding::build(&table).unwrap();
        let path = dir.path().join("legend.json");
        save_legend(&path, &LegendFile::new(&enc, "2024-01-01T00:00:00Z".into())).unwrap();
        let legend = load_legend(&path).unwrap();
        assert_eq!(legend.sqf_to_diseases[&6], vec!["A".to_string(), "B".to_string()]);
        assert_eq!(legend.version, 1);
    }

    #[test]
    fn missing_default_plan_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plans.json");
        std::fs::write(&path, r#"{"Flu": "Rest."}"#).unwrap();
        let err = load_plans(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Default"));
    }

    #[test]
    fn malformed_table_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"symptoms":["a"],"matrix":[{"name":"X","presence":[3]}]}"#).unwrap();
        let err = load_table(&path).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }
}
