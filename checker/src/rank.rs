use crate::MatchResult;
use std::cmp::Reverse;

/// Order matches by count descending, then disease name ascending.
pub fn rank<I>(matches: I) -> Vec<MatchResult>
where
    I: IntoIterator<Item = (String, u32)>,
{
    let mut ranked: Vec<MatchResult> = matches
        .into_iter()
        .map(|(disease, count)| MatchResult { disease, count })
        .collect();
    ranked.sort_by(|a, b| (Reverse(a.count), &a.disease).cmp(&(Reverse(b.count), &b.disease)));
    ranked
}
