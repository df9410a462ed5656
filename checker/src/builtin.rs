//! Demonstration data: a mix of common and rare diseases.

use crate::{ActionPlans, Result, SymptomTable};

const DISEASES: &[(&str, &[&str])] = &[
    ("Common Cold", &["Cough", "Sore throat", "Runny nose", "Sneezing", "Fatigue"]),
    (
        "Influenza",
        &["Fever", "Cough", "Sore throat", "Runny nose", "Body aches", "Fatigue", "Headache", "Chills"],
    ),
    ("Strep Throat", &["Fever", "Sore throat", "Headache", "Swollen Tonsils", "Fatigue", "Nausea"]),
    ("Seasonal Allergies", &["Runny nose", "Sneezing", "Itchy eyes", "Cough"]),
    (
        "Acute Intermittent Porphyria (AIP)",
        &["Severe abdominal pain", "Nausea", "Muscle weakness", "Confusion", "Anxiety", "Tachycardia"],
    ),
    (
        "Creutzfeldt-Jakob Disease (CJD)",
        &["Rapid cognitive decline", "Memory loss", "Myoclonus", "Ataxia", "Confusion", "Visual disturbances"],
    ),
    (
        "Fibrodysplasia Ossificans Progressiva (FOP)",
        &["Malformed great toe", "Localized painful swelling", "Reduced joint mobility", "Difficulty breathing"],
    ),
    (
        "Fatal Familial Insomnia (FFI)",
        &[
            "Progressive severe insomnia",
            "Panic attacks",
            "Hallucinations",
            "Ataxia",
            "Memory loss",
            "Autonomic dysfunction",
        ],
    ),
    (
        "Guillain-Barré Syndrome (GBS)",
        &[
            "Muscle weakness",
            "Tingling in extremities",
            "Unsteady walk (Ataxia)",
            "Difficulty breathing",
            "Autonomic dysfunction",
            "Pain",
        ],
    ),
    (
        "Gastroenteritis (Stomach Flu)",
        &["Nausea", "Vomiting", "Diarrhea", "Abdominal pain", "Fever", "Headache"],
    ),
];

const ACTION_PLANS: &[(&str, &str)] = &[
    ("Common Cold", "Action: Rest, stay hydrated, use over-the-counter remedies for symptom relief if needed. Consult a doctor if symptoms worsen, are severe, or persist beyond 10-14 days."),
    ("Influenza", "Action: Consult a healthcare professional promptly for potential diagnosis and antiviral treatment, especially if in a high-risk group. Rest, fluids, and fever management are crucial."),
    ("Strep Throat", "Action: See a doctor for a rapid strep test or throat culture. Antibiotics are usually required if positive. Complete the full course if prescribed."),
    ("Seasonal Allergies", "Action: Identify and avoid triggers if possible. Over-the-counter antihistamines or nasal sprays may help. Consult a doctor or allergist for persistent or severe symptoms."),
    ("Gastroenteritis (Stomach Flu)", "Action: Focus on hydration (small sips of clear fluids). Rest. Gradually reintroduce bland foods. Seek medical attention if dehydration, high fever, severe pain, or bloody stools occur."),
    ("Acute Intermittent Porphyria (AIP)", "Action: This possibility requires URGENT medical evaluation by a healthcare professional, potentially in an emergency setting, for diagnosis and management."),
    ("Creutzfeldt-Jakob Disease (CJD)", "Action: These symptoms require URGENT specialist neurological evaluation. Consult a healthcare professional immediately."),
    ("Fibrodysplasia Ossificans Progressiva (FOP)", "Action: Requires specialist consultation (e.g., geneticist, rheumatologist) for diagnosis and management plan. Avoid trauma/injections if suspected."),
    ("Fatal Familial Insomnia (FFI)", "Action: These symptoms require URGENT specialist neurological and sleep evaluation. Consult a healthcare professional immediately."),
    ("Guillain-Barré Syndrome (GBS)", "Action: This possibility requires URGENT medical evaluation, often in a hospital setting, due to potential for rapid progression and breathing issues."),
    ("Default", "Action: Consult a healthcare professional for an accurate diagnosis and appropriate treatment plan."),
];

pub fn table() -> Result<SymptomTable> {
    SymptomTable::from_sets(DISEASES.iter().map(|(name, symptoms)| (*name, symptoms.iter().copied())))
}

pub fn action_plans() -> Result<ActionPlans> {
    ActionPlans::new(ACTION_PLANS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoding;

    #[test]
    fn builtin_data_is_well_formed() {
        let table = table().unwrap();
        assert_eq!(table.len(), 10);
        let plans = action_plans().unwrap();
        for disease in table.diseases() {
            assert!(plans.has_specific(&disease.name), "no plan for {}", disease.name);
        }
        let enc = Encoding::build(&table).unwrap();
        assert_eq!(enc.symptom_count(), table.symptom_universe().len());
        assert_eq!(enc.prime_of("Abdominal pain"), Some(2));
    }
}
