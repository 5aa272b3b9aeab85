//! Equal-width histogram and top-n index selection.

/// Equal-width histogram over `[min, max]` of `values`.
///
/// Returns `(counts, edges)` with `counts.len() == n_bins` and
/// `edges.len() == n_bins + 1`; the final edge is exactly `max` and the
/// last bin is right-inclusive. A zero-width range (all values equal)
/// collapses every edge to that value and puts every observation in the
/// first bin.
pub fn histogram(values: &[f64], n_bins: usize) -> (Vec<usize>, Vec<f64>) {
    assert!(n_bins > 0, "histogram requires at least one bin");

    let mut counts = vec![0usize; n_bins];
    if values.is_empty() {
        return (counts, vec![0.0; n_bins + 1]);
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / n_bins as f64;

    let edges: Vec<f64> = (0..=n_bins)
        .map(|i| if i == n_bins { max } else { min + width * i as f64 })
        .collect();

    for &v in values {
        let bin = if width > 0.0 {
            (((v - min) / width) as usize).min(n_bins - 1)
        } else {
            0
        };
        counts[bin] += 1;
    }

    (counts, edges)
}

/// Indices of the `n` largest values, largest first.
///
/// Ties resolve to the lower index; `n` is capped at `values.len()`.
pub fn argmax_n(values: &[usize], n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[j].cmp(&values[i]).then(i.cmp(&j)));
    order.truncate(n.min(values.len()));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_sum_to_len() {
        let values = [0.1, 0.4, 0.4, 0.9, -0.2, 0.7];
        let (counts, edges) = histogram(&values, 4);
        assert_eq!(counts.iter().sum::<usize>(), values.len());
        assert_eq!(edges.len(), 5);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let (counts, edges) = histogram(&values, 4);
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(edges[4], 4.0);
    }

    #[test]
    fn test_histogram_zero_width_single_bin() {
        let values = [2.5, 2.5, 2.5];
        let (counts, edges) = histogram(&values, 5);
        assert_eq!(counts[0], 3);
        assert!(counts[1..].iter().all(|&c| c == 0));
        assert!(edges.iter().all(|&e| e == 2.5));
    }

    #[test]
    fn test_argmax_n_orders_by_count() {
        let counts = [3, 7, 1, 5];
        assert_eq!(argmax_n(&counts, 2), vec![1, 3]);
    }

    #[test]
    fn test_argmax_n_ties_prefer_lower_index() {
        let counts = [4, 2, 4, 1];
        assert_eq!(argmax_n(&counts, 1), vec![0]);
        assert_eq!(argmax_n(&counts, 2), vec![0, 2]);
    }

    #[test]
    fn test_argmax_n_caps_at_len() {
        let counts = [1, 2];
        assert_eq!(argmax_n(&counts, 10).len(), 2);
    }
}
