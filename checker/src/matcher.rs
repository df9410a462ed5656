use crate::{Prime, Sqf};
use std::collections::BTreeMap;

/// Count, per disease, how many of `user_primes` divide its SQF.
///
/// Diseases with no matching prime are left out. A zero prime never divides.
pub fn match_counts<'a, P>(user_primes: P, disease_to_sqf: &BTreeMap<String, Sqf>) -> BTreeMap<String, u32>
where
    P: IntoIterator<Item = &'a Prime>,
    P::IntoIter: Clone,
{
    let primes = user_primes.into_iter();
    let mut counts = BTreeMap::new();
    if primes.clone().next().is_none() {
        return counts;
    }
    for (disease, &sqf) in disease_to_sqf {
        let count = primes
            .clone()
            .filter(|&&p| sqf.checked_rem(Sqf::from(p)) == Some(0))
            .count() as u32;
        if count > 0 {
            counts.insert(disease.clone(), count);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn sqfs() -> BTreeMap<String, Sqf> {
        BTreeMap::from([
            ("Common Cold".to_string(), 10),
            ("Influenza".to_string(), 30),
            ("Nothing".to_string(), 1),
        ])
    }

    #[test]
    fn empty_query_matches_nothing() {
        let none: BTreeSet<Prime> = BTreeSet::new();
        assert!(match_counts(&none, &sqfs()).is_empty());
    }

    #[test]
    fn counts_divisors() {
        let q: BTreeSet<Prime> = BTreeSet::from([2, 3]);
        let m = match_counts(&q, &sqfs());
        assert_eq!(m.len(), 2);
        assert_eq!(m["Common Cold"], 1);
        assert_eq!(m["Influenza"], 2);
        assert!(!m.contains_key("Nothing"));
    }

    #[test]
    fn zero_prime_is_ignored() {
        let q: [Prime; 2] = [0, 5];
        let m = match_counts(&q, &sqfs());
        assert_eq!(m["Common Cold"], 1);
        assert_eq!(m["Influenza"], 1);
    }
}
