//! Descriptive statistics over non-empty slices.
//!
//! Every function here rejects an empty slice with
//! [`NumError::EmptyInput`] instead of returning `0.0` or NaN.
//!
//! # Conventions
//!
//! - **Variance** is the *population* variance: squared deviations are
//!   divided by `n`, not `n − 1`.
//! - **Mode** returns every value tied for the highest count, in the
//!   order each value first appears in the input.
//! - `_iterative` variants replace the library reductions and sorts with
//!   explicit loops. Both forms agree on finite input; behaviour with NaN
//!   elements is unspecified.

use std::collections::HashMap;

use crate::arithmetic::{
    max, max_iterative, min, min_iterative, square_root_iterative, sum, sum_iterative,
};
use crate::error::{NumError, NumResult};

fn ensure_non_empty(data: &[f64]) -> NumResult<()> {
    if data.is_empty() {
        Err(NumError::EmptyInput)
    } else {
        Ok(())
    }
}

/// Arithmetic mean, `sum / n`.
///
/// # Errors
/// [`NumError::EmptyInput`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::average;
/// use u_numkit::NumError;
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
/// assert_eq!(average(&[]), Err(NumError::EmptyInput));
/// ```
pub fn average(data: &[f64]) -> NumResult<f64> {
    ensure_non_empty(data)?;
    Ok(sum(data) / data.len() as f64)
}

/// [`average`] built on [`sum_iterative`].
pub fn average_iterative(data: &[f64]) -> NumResult<f64> {
    ensure_non_empty(data)?;
    Ok(sum_iterative(data) / data.len() as f64)
}

/// Computes the median of `data` without mutating the input.
///
/// Clones and sorts numerically, then returns the middle element (or
/// the average of the two middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_numkit::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
/// ```
pub fn median(data: &[f64]) -> NumResult<f64> {
    ensure_non_empty(data)?;
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(middle_of_sorted(&sorted))
}

/// [`median`] with an explicit insertion sort.
///
/// # Complexity
/// Time: O(n²), Space: O(n)
pub fn median_iterative(data: &[f64]) -> NumResult<f64> {
    ensure_non_empty(data)?;
    let mut sorted = data.to_vec();
    for i in 1..sorted.len() {
        let value = sorted[i];
        let mut j = i;
        while j > 0 && sorted[j - 1] > value {
            sorted[j] = sorted[j - 1];
            j -= 1;
        }
        sorted[j] = value;
    }
    Ok(middle_of_sorted(&sorted))
}

fn middle_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Most frequent value(s) in `data`.
///
/// Multimodal input yields several values, ordered by first appearance.
/// Values are compared by bit pattern with `-0.0` folded into `0.0` and
/// all NaNs treated as one value; the first occurrence is the one
/// reported.
///
/// # Examples
/// ```
/// use u_numkit::stats::mode;
/// assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), Ok(vec![2.0]));
/// assert_eq!(mode(&[3.0, 1.0, 1.0, 3.0, 2.0]), Ok(vec![3.0, 1.0]));
/// ```
pub fn mode(data: &[f64]) -> NumResult<Vec<f64>> {
    ensure_non_empty(data)?;
    let mut counts: HashMap<u64, usize> = HashMap::with_capacity(data.len());
    let mut distinct = Vec::new();
    for &x in data {
        let count = counts.entry(frequency_key(x)).or_insert(0);
        if *count == 0 {
            distinct.push(x);
        }
        *count += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(0);
    Ok(distinct
        .into_iter()
        .filter(|&x| counts.get(&frequency_key(x)) == Some(&max_count))
        .collect())
}

/// [`mode`] with a linear-scan frequency table.
///
/// # Complexity
/// Time: O(n · d) for `d` distinct values, Space: O(d)
pub fn mode_iterative(data: &[f64]) -> NumResult<Vec<f64>> {
    ensure_non_empty(data)?;
    let mut table: Vec<(f64, usize)> = Vec::new();
    for &x in data {
        let key = frequency_key(x);
        let mut found = false;
        for entry in table.iter_mut() {
            if frequency_key(entry.0) == key {
                entry.1 += 1;
                found = true;
                break;
            }
        }
        if !found {
            table.push((x, 1));
        }
    }
    let mut max_count = 0;
    for &(_, count) in &table {
        if count > max_count {
            max_count = count;
        }
    }
    let mut modes = Vec::new();
    for &(value, count) in &table {
        if count == max_count {
            modes.push(value);
        }
    }
    Ok(modes)
}

fn frequency_key(x: f64) -> u64 {
    if x.is_nan() {
        f64::NAN.to_bits()
    } else if x == 0.0 {
        0.0_f64.to_bits()
    } else {
        x.to_bits()
    }
}

/// Spread of `data`, `max − min`.
///
/// # Examples
/// ```
/// use u_numkit::stats::range;
/// assert_eq!(range(&[3.0, -1.0, 4.0]), Ok(5.0));
/// ```
pub fn range(data: &[f64]) -> NumResult<f64> {
    ensure_non_empty(data)?;
    Ok(max(data) - min(data))
}

/// [`range`] built on [`max_iterative`] and [`min_iterative`].
pub fn range_iterative(data: &[f64]) -> NumResult<f64> {
    let largest = max_iterative(data).ok_or(NumError::EmptyInput)?;
    let smallest = min_iterative(data).ok_or(NumError::EmptyInput)?;
    Ok(largest - smallest)
}

/// Population variance: mean squared deviation from the mean.
///
/// Two-pass: the mean first, then the squared deviations.
///
/// # Examples
/// ```
/// use u_numkit::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&v), Ok(4.0));
/// ```
pub fn variance(data: &[f64]) -> NumResult<f64> {
    let mean = average(data)?;
    let squares = data.iter().fold(0.0, |acc, &x| {
        let d = x - mean;
        acc + d * d
    });
    Ok(squares / data.len() as f64)
}

/// [`variance`] with explicit loops throughout.
pub fn variance_iterative(data: &[f64]) -> NumResult<f64> {
    let mean = average_iterative(data)?;
    let mut squares = 0.0;
    for &x in data {
        let d = x - mean;
        squares += d * d;
    }
    Ok(squares / data.len() as f64)
}

/// Population standard deviation, `sqrt(variance(data))`.
///
/// # Examples
/// ```
/// use u_numkit::stats::standard_deviation;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(standard_deviation(&v), Ok(2.0));
/// ```
pub fn standard_deviation(data: &[f64]) -> NumResult<f64> {
    variance(data).map(f64::sqrt)
}

/// [`standard_deviation`] with the Newton square root.
pub fn standard_deviation_iterative(data: &[f64]) -> NumResult<f64> {
    square_root_iterative(variance_iterative(data)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 8] = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];

    // --- empty input ---

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(average(&[]), Err(NumError::EmptyInput));
        assert_eq!(average_iterative(&[]), Err(NumError::EmptyInput));
        assert_eq!(median(&[]), Err(NumError::EmptyInput));
        assert_eq!(median_iterative(&[]), Err(NumError::EmptyInput));
        assert_eq!(mode(&[]), Err(NumError::EmptyInput));
        assert_eq!(mode_iterative(&[]), Err(NumError::EmptyInput));
        assert_eq!(range(&[]), Err(NumError::EmptyInput));
        assert_eq!(range_iterative(&[]), Err(NumError::EmptyInput));
        assert_eq!(variance(&[]), Err(NumError::EmptyInput));
        assert_eq!(variance_iterative(&[]), Err(NumError::EmptyInput));
        assert_eq!(standard_deviation(&[]), Err(NumError::EmptyInput));
        assert_eq!(standard_deviation_iterative(&[]), Err(NumError::EmptyInput));
    }

    // --- average ---

    #[test]
    fn test_average() {
        assert_eq!(average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
        assert_eq!(average(&[42.0]), Ok(42.0));
        assert_eq!(average_iterative(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
    }

    // --- median ---

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(2.0));
        assert_eq!(median_iterative(&[3.0, 1.0, 2.0]), Ok(2.0));
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
        assert_eq!(median_iterative(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
    }

    #[test]
    fn test_median_is_numeric_not_lexical() {
        // lexical order would put 10 before 9
        assert_eq!(median(&[10.0, 9.0, 100.0]), Ok(10.0));
        assert_eq!(median_iterative(&[10.0, 9.0, 100.0]), Ok(10.0));
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let data = [3.0, 1.0, 2.0];
        median(&data).unwrap();
        median_iterative(&data).unwrap();
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }

    // --- mode ---

    #[test]
    fn test_mode_multimodal() {
        let data = [1.0, 1.0, 2.0, 2.0, 3.0];
        for result in [mode(&data).unwrap(), mode_iterative(&data).unwrap()] {
            let mut sorted = result;
            sorted.sort_by(f64::total_cmp);
            assert_eq!(sorted, vec![1.0, 2.0]);
        }
    }

    #[test]
    fn test_mode_first_seen_order() {
        let data = [5.0, 3.0, 3.0, 5.0, 1.0];
        assert_eq!(mode(&data), Ok(vec![5.0, 3.0]));
        assert_eq!(mode_iterative(&data), Ok(vec![5.0, 3.0]));
    }

    #[test]
    fn test_mode_all_distinct() {
        let data = [4.0, 2.0, 9.0];
        assert_eq!(mode(&data), Ok(vec![4.0, 2.0, 9.0]));
        assert_eq!(mode_iterative(&data), Ok(vec![4.0, 2.0, 9.0]));
    }

    #[test]
    fn test_mode_signed_zero_counts_once() {
        let data = [0.0, -0.0, 1.0];
        assert_eq!(mode(&data), Ok(vec![0.0]));
        assert_eq!(mode_iterative(&data), Ok(vec![0.0]));
    }

    #[test]
    fn test_mode_groups_nan() {
        let data = [f64::NAN, 1.0, f64::NAN];
        let m = mode(&data).unwrap();
        assert_eq!(m.len(), 1);
        assert!(m[0].is_nan());
        let m = mode_iterative(&data).unwrap();
        assert_eq!(m.len(), 1);
        assert!(m[0].is_nan());
    }

    // --- range ---

    #[test]
    fn test_range() {
        assert_eq!(range(&[3.0, -1.0, 4.0, 1.0]), Ok(5.0));
        assert_eq!(range_iterative(&[3.0, -1.0, 4.0, 1.0]), Ok(5.0));
        assert_eq!(range(&[7.0]), Ok(0.0));
    }

    // --- variance / standard deviation ---

    #[test]
    fn test_population_variance() {
        assert_eq!(variance(&SAMPLE), Ok(4.0));
        assert_eq!(variance_iterative(&SAMPLE), Ok(4.0));
    }

    #[test]
    fn test_variance_constant() {
        assert_eq!(variance(&[5.0; 100]), Ok(0.0));
        assert_eq!(variance(&[5.0]), Ok(0.0));
    }

    #[test]
    fn test_standard_deviation() {
        assert_eq!(standard_deviation(&SAMPLE), Ok(2.0));
        assert_eq!(standard_deviation_iterative(&SAMPLE), Ok(2.0));
    }

    #[test]
    fn test_standard_deviation_zero_variance() {
        assert_eq!(standard_deviation_iterative(&[3.0, 3.0]), Ok(0.0));
    }
}
