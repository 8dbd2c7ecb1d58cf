// src/domain/sampling.rs

/// Positions picked from a sorted sequence of `total` items when `n` samples
/// are wanted: `floor(i * total / n)` for `i` in `0..n`, with `n` clamped to
/// `total`. Always starts at 0 and is strictly increasing.
pub fn sample_indices(total: usize, n: usize) -> Vec<usize> {
    let n = n.min(total);
    (0..n).map(|i| i * total / n).collect()
}

/// Sorts `priced` by price and keeps `n` items spread evenly across the range.
///
/// The sort is stable, so listings with the same price keep their input order.
/// Fewer than `n` priced items means all of them come back; nothing is repeated.
/// The cheapest item is always included, the most expensive one only when the
/// spacing lands on it.
pub fn stratified_sample<T>(mut priced: Vec<(u64, T)>, n: usize) -> Vec<T> {
    priced.sort_by_key(|(price, _)| *price);

    let indices = sample_indices(priced.len(), n);
    let mut picked = indices.iter().peekable();

    priced
        .into_iter()
        .enumerate()
        .filter_map(|(idx, (_, item))| {
            if picked.peek() == Some(&&idx) {
                picked.next();
                Some(item)
            } else {
                None
            }
        })
        .collect()
}
