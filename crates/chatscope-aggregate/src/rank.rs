use std::collections::HashMap;
use std::hash::Hash;

/// Count occurrences and order them by count descending. Equal counts keep
/// the order in which each key first appeared.
pub(crate) fn rank_counts<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slot: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for item in items {
        match slot.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slot.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }
    // sort_by is stable, so first-appearance order survives among ties.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// `part / whole` as a percentage rounded to two decimals; 0 when `whole` is 0.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let raw = part as f64 / whole as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
