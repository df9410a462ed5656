//! The disease → symptom-set table the encoding is derived from.
//!
//! A table is built once at startup and never mutated afterwards. It accepts
//! either a set of present symptoms per disease or a 0/1 presence matrix;
//! both reduce to the same shape.

use crate::{CheckerError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub name: String,
    pub symptoms: BTreeSet<String>,
}

/// Immutable table of diseases in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomTable {
    diseases: Vec<DiseaseEntry>,
}

/// On-disk form of a table: a list of rows, a name → symptoms object, or a
/// presence matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableFile {
    Sets { diseases: Vec<DiseaseRow> },
    Named { diseases: DiseaseMap },
    Matrix { symptoms: Vec<String>, matrix: Vec<PresenceRow> },
}

/// JSON object of disease name → symptom list, kept in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseMap(pub Vec<(String, Vec<String>)>);

impl Serialize for DiseaseMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, symptoms) in &self.0 {
            map.serialize_entry(name, symptoms)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DiseaseMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = DiseaseMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of disease name to symptom list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<DiseaseMap, A::Error> {
                let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(row) = access.next_entry::<String, Vec<String>>()? {
                    rows.push(row);
                }
                Ok(DiseaseMap(rows))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseRow {
    pub name: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceRow {
    pub name: String,
    pub presence: Vec<u8>,
}

/// Trim and NFC-normalize a symptom or disease name.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfc().collect()
}

impl SymptomTable {
    pub fn from_sets<I, N, S, T>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut diseases = Vec::new();
        let mut seen = HashSet::new();
        for (name, symptoms) in rows {
            let name = checked_name(name.as_ref(), "disease")?;
            if !seen.insert(name.clone()) {
                return Err(CheckerError::MalformedTable(format!("duplicate disease {name:?}")));
            }
            let symptoms = symptoms
                .into_iter()
                .map(|s| checked_name(s.as_ref(), "symptom"))
                .collect::<Result<BTreeSet<_>>>()?;
            diseases.push(DiseaseEntry { name, symptoms });
        }
        Ok(Self { diseases })
    }

    /// Build from a matrix whose columns are `symptoms` and whose cells are 0 or 1.
    pub fn from_presence_matrix<N, R>(symptoms: &[String], rows: R) -> Result<Self>
    where
        R: IntoIterator<Item = (N, Vec<u8>)>,
        N: AsRef<str>,
    {
        let columns = symptoms
            .iter()
            .map(|s| checked_name(s, "symptom"))
            .collect::<Result<Vec<_>>>()?;
        let unique: HashSet<&String> = columns.iter().collect();
        if unique.len() != columns.len() {
            return Err(CheckerError::MalformedTable("duplicate symptom column".into()));
        }

        let mut sets = Vec::new();
        for (name, presence) in rows {
            let name = name.as_ref();
            if presence.len() != columns.len() {
                return Err(CheckerError::MalformedTable(format!(
                    "row {name:?} has {} cells, expected {}",
                    presence.len(),
                    columns.len()
                )));
            }
            let mut present = Vec::new();
            for (cell, symptom) in presence.iter().zip(&columns) {
                match cell {
                    0 => {}
                    1 => present.push(symptom.clone()),
                    other => {
                        return Err(CheckerError::MalformedTable(format!(
                            "row {name:?} has presence value {other}, expected 0 or 1"
                        )))
                    }
                }
            }
            sets.push((name.to_string(), present));
        }
        Self::from_sets(sets)
    }

    pub fn from_file(file: TableFile) -> Result<Self> {
        match file {
            TableFile::Sets { diseases } => {
                Self::from_sets(diseases.into_iter().map(|row| (row.name, row.symptoms)))
            }
            TableFile::Named { diseases } => Self::from_sets(diseases.0),
            TableFile::Matrix { symptoms, matrix } => {
                Self::from_presence_matrix(&symptoms, matrix.into_iter().map(|row| (row.name, row.presence)))
            }
        }
    }

    pub fn to_file(&self) -> TableFile {
        TableFile::Sets {
            diseases: self
                .diseases
                .iter()
                .map(|d| DiseaseRow { name: d.name.clone(), symptoms: d.symptoms.iter().cloned().collect() })
                .collect(),
        }
    }

    /// Diseases in table order.
    pub fn diseases(&self) -> &[DiseaseEntry] {
        &self.diseases
    }

    pub fn get(&self, disease: &str) -> Option<&DiseaseEntry> {
        self.diseases.iter().find(|d| d.name == disease)
    }

    /// Every distinct symptom mentioned by any disease.
    pub fn symptom_universe(&self) -> BTreeSet<&str> {
        self.diseases
            .iter()
            .flat_map(|d| d.symptoms.iter().map(String::as_str))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}

fn checked_name(raw: &str, what: &str) -> Result<String> {
    let name = normalize_name(raw);
    if name.is_empty() {
        return Err(CheckerError::MalformedTable(format!("empty {what} name")));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_and_matrix_agree() {
        let sets = SymptomTable::from_sets([
            ("Cold", vec!["Cough", "Sneezing"]),
            ("Flu", vec!["Cough", "Fever"]),
        ])
        .unwrap();
        let columns = vec!["Cough".to_string(), "Fever".to_string(), "Sneezing".to_string()];
        let matrix = SymptomTable::from_presence_matrix(
            &columns,
            [("Cold", vec![1, 0, 1]), ("Flu", vec![1, 1, 0])],
        )
        .unwrap();
        assert_eq!(sets, matrix);
    }

    #[test]
    fn names_are_trimmed_and_normalized() {
        // "e" + combining acute accent
        let table = SymptomTable::from_sets([(" Guillain-Barre\u{301} ", vec![" Pain "])]).unwrap();
        let entry = &table.diseases()[0];
        assert_eq!(entry.name, "Guillain-Barr\u{e9}");
        assert!(entry.symptoms.contains("Pain"));
    }

    #[test]
    fn duplicate_disease_is_malformed() {
        let err = SymptomTable::from_sets([("Flu", vec!["Fever"]), ("Flu ", vec!["Cough"])]).unwrap_err();
        assert!(matches!(err, CheckerError::MalformedTable(_)));
    }

    #[test]
    fn bad_matrix_cells_rejected() {
        let columns = vec!["Cough".to_string()];
        assert!(SymptomTable::from_presence_matrix(&columns, [("Flu", vec![2])]).is_err());
        assert!(SymptomTable::from_presence_matrix(&columns, [("Flu", vec![1, 0])]).is_err());
    }

    #[test]
    fn untagged_file_forms() {
        let sets: TableFile =
            serde_json::from_str(r#"{"diseases":[{"name":"Flu","symptoms":["Fever"]},{"name":"Odd"}]}"#).unwrap();
        let table = SymptomTable::from_file(sets).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.get("Odd").unwrap().symptoms.is_empty());

        let matrix: TableFile =
            serde_json::from_str(r#"{"symptoms":["Fever"],"matrix":[{"name":"Flu","presence":[1]}]}"#).unwrap();
        assert_eq!(SymptomTable::from_file(matrix).unwrap(), table_with_flu());
    }

    #[test]
    fn object_form_keeps_file_order() {
        let file: TableFile = serde_json::from_str(
            r#"{"diseases":{"Zoster":["Rash","Pain"],"Flu":["Fever"],"Acne":["Rash"],"Ghost":[]}}"#,
        )
        .unwrap();
        assert!(matches!(file, TableFile::Named { .. }));
        let table = SymptomTable::from_file(file).unwrap();
        let names: Vec<&str> = table.diseases().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Zoster", "Flu", "Acne", "Ghost"]);
        assert!(table.get("Zoster").unwrap().symptoms.contains("Pain"));

        let back = serde_json::to_string(&TableFile::Named {
            diseases: DiseaseMap(vec![("Flu".into(), vec!["Fever".into()])]),
        })
        .unwrap();
        assert_eq!(back, r#"{"diseases":{"Flu":["Fever"]}}"#);
    }

    #[test]
    fn object_form_duplicates_rejected() {
        let file: TableFile = serde_json::from_str(r#"{"diseases":{"Flu":["Fever"],"Flu":["Cough"]}}"#).unwrap();
        assert!(matches!(SymptomTable::from_file(file), Err(CheckerError::MalformedTable(_))));
    }

    fn table_with_flu() -> SymptomTable {
        SymptomTable::from_sets([("Flu", vec!["Fever"])]).unwrap()
    }
}
