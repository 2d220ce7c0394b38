//! Linear-time array algorithms.

use crate::utils::error::{DrillError, Result};
use std::collections::VecDeque;

/// Boyer–Moore majority vote.
///
/// Returns the value occurring strictly more than `nums.len() / 2` times.
/// The voting pass only yields a candidate; the second pass confirms it.
pub fn majority_element(nums: &[i64]) -> Option<i64> {
    let mut candidate = None;
    let mut count = 0usize;

    for &x in nums {
        if count == 0 {
            candidate = Some(x);
        }
        if candidate == Some(x) {
            count += 1;
        } else {
            count -= 1;
        }
    }

    let candidate = candidate?;
    let occurrences = nums.iter().filter(|&&x| x == candidate).count();
    (occurrences > nums.len() / 2).then_some(candidate)
}

/// Kadane's maximum subarray sum over non-empty contiguous subarrays.
pub fn max_subarray_sum(nums: &[i64]) -> Result<i64> {
    let (&first, _) = nums.split_first().ok_or_else(|| DrillError::EmptyInputError {
        what: "sequence".to_string(),
    })?;

    // Seeded from the first element so an all-negative input yields its maximum.
    let mut best = first;
    let mut ending_here: i64 = 0;
    for &x in nums {
        ending_here = ending_here
            .checked_add(x)
            .ok_or_else(|| DrillError::overflow("subarray sum"))?;
        best = best.max(ending_here);
        if ending_here < 0 {
            ending_here = 0;
        }
    }
    Ok(best)
}

fn check_window(len: usize, k: usize) -> Result<()> {
    if k == 0 || k > len {
        return Err(DrillError::InvalidWindowError { k, len });
    }
    Ok(())
}

/// Maximum sum over all windows of exactly `k` elements.
///
/// The running sum slides in i128, so only a window whose real sum leaves
/// the i64 range is an overflow.
pub fn max_window_sum(nums: &[i64], k: usize) -> Result<i64> {
    check_window(nums.len(), k)?;

    let window = |sum: i128| i64::try_from(sum).map_err(|_| DrillError::overflow("window sum"));

    let mut current: i128 = nums[..k].iter().map(|&x| i128::from(x)).sum();
    let mut best = window(current)?;

    for i in k..nums.len() {
        current += i128::from(nums[i]) - i128::from(nums[i - k]);
        best = best.max(window(current)?);
    }
    Ok(best)
}

/// First negative value of each window of `k` elements, 0 for windows without one.
pub fn first_negative_per_window(nums: &[i64], k: usize) -> Result<Vec<i64>> {
    check_window(nums.len(), k)?;

    let mut negatives: VecDeque<usize> = VecDeque::new();
    let mut out = Vec::with_capacity(nums.len() - k + 1);

    for (i, &x) in nums.iter().enumerate() {
        if x < 0 {
            negatives.push_back(i);
        }
        if i + 1 < k {
            continue;
        }
        let window_start = i + 1 - k;
        while negatives.front().is_some_and(|&idx| idx < window_start) {
            negatives.pop_front();
        }
        out.push(negatives.front().map_or(0, |&idx| nums[idx]));
    }
    Ok(out)
}

/// `answer[i]` is the product of every element except `nums[i]`, computed without division.
pub fn product_except_self(nums: &[i64]) -> Result<Vec<i64>> {
    let zeros = nums.iter().filter(|&&x| x == 0).count();
    if zeros > 0 {
        // Only the position of a lone zero can be non-zero.
        let mut answer = vec![0i64; nums.len()];
        if zeros == 1 {
            if let Some(z) = nums.iter().position(|&x| x == 0) {
                answer[z] = nums
                    .iter()
                    .filter(|&&x| x != 0)
                    .try_fold(1i64, |acc, &x| acc.checked_mul(x))
                    .ok_or_else(|| DrillError::overflow("product"))?;
            }
        }
        return Ok(answer);
    }

    // A prefix or suffix that overflows is only an error once an answer needs it.
    let mut prefixes = Vec::with_capacity(nums.len());
    let mut prefix = Some(1i64);
    for &x in nums {
        prefixes.push(prefix);
        prefix = prefix.and_then(|p| p.checked_mul(x));
    }

    let mut answer = vec![0i64; nums.len()];
    let mut suffix = Some(1i64);
    for i in (0..nums.len()).rev() {
        answer[i] = prefixes[i]
            .zip(suffix)
            .and_then(|(p, s)| p.checked_mul(s))
            .ok_or_else(|| DrillError::overflow("product"))?;
        suffix = suffix.and_then(|s| s.checked_mul(nums[i]));
    }
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_found() {
        assert_eq!(majority_element(&[2, 2, 1, 1, 1, 2, 2]), Some(2));
        assert_eq!(majority_element(&[3, 3, 4]), Some(3));
        assert_eq!(majority_element(&[7]), Some(7));
    }

    #[test]
    fn test_majority_absent() {
        assert_eq!(majority_element(&[1, 2, 3, 4]), None);
        assert_eq!(majority_element(&[]), None);
        // exactly half is not a majority
        assert_eq!(majority_element(&[1, 1, 2, 2]), None);
    }

    #[test]
    fn test_majority_rejects_unverified_candidate() {
        // The voting pass ends on 3 here, which occurs only once.
        assert_eq!(majority_element(&[1, 1, 2, 2, 3]), None);
    }

    #[test]
    fn test_max_subarray_mixed() {
        assert_eq!(max_subarray_sum(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]).unwrap(), 5);
    }

    #[test]
    fn test_max_subarray_all_negative() {
        assert_eq!(max_subarray_sum(&[-5, -2, -8]).unwrap(), -2);
        assert_eq!(max_subarray_sum(&[-9]).unwrap(), -9);
    }

    #[test]
    fn test_max_subarray_empty_is_error() {
        assert!(matches!(
            max_subarray_sum(&[]),
            Err(DrillError::EmptyInputError { .. })
        ));
    }

    #[test]
    fn test_max_subarray_overflow() {
        assert!(matches!(
            max_subarray_sum(&[i64::MAX, 1]),
            Err(DrillError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_max_window_sum() {
        assert_eq!(max_window_sum(&[2, 1, 5, 1, 3, 2], 3).unwrap(), 9);
        assert_eq!(max_window_sum(&[-3, -1, -2], 1).unwrap(), -1);
        assert_eq!(max_window_sum(&[4, 5], 2).unwrap(), 9);
    }

    #[test]
    fn test_max_window_sum_at_i64_bound() {
        assert_eq!(max_window_sum(&[1, i64::MAX - 1, 1], 2).unwrap(), i64::MAX);
        assert_eq!(max_window_sum(&[i64::MIN, 0, i64::MAX], 1).unwrap(), i64::MAX);
        assert!(matches!(
            max_window_sum(&[i64::MAX, 1], 2),
            Err(DrillError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_window_bounds() {
        assert!(matches!(
            max_window_sum(&[1, 2], 3),
            Err(DrillError::InvalidWindowError { k: 3, len: 2 })
        ));
        assert!(max_window_sum(&[1, 2], 0).is_err());
        assert!(first_negative_per_window(&[], 1).is_err());
    }

    #[test]
    fn test_first_negative_per_window() {
        assert_eq!(
            first_negative_per_window(&[-8, 2, 3, -6, 10], 2).unwrap(),
            vec![-8, 0, -6, -6]
        );
        assert_eq!(
            first_negative_per_window(&[12, -1, -7, 8, -15, 30, 16, 28], 3).unwrap(),
            vec![-1, -1, -7, -15, -15, 0]
        );
    }

    #[test]
    fn test_product_except_self() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]).unwrap(), vec![24, 12, 8, 6]);
        assert_eq!(product_except_self(&[0, 2, 3]).unwrap(), vec![6, 0, 0]);
        assert_eq!(product_except_self(&[5]).unwrap(), vec![1]);
        assert!(product_except_self(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_product_except_self_overflow() {
        assert!(product_except_self(&[i64::MAX, 2, 2]).is_err());
        // The total product overflows but every answer fits.
        assert_eq!(product_except_self(&[i64::MAX, 2]).unwrap(), vec![2, i64::MAX]);
        assert_eq!(
            product_except_self(&[i64::MAX, 2, 2, 0]).map_err(|e| e.to_string()),
            Err("Arithmetic overflow during product".to_string())
        );
        assert_eq!(product_except_self(&[0, 0, 5]).unwrap(), vec![0, 0, 0]);
    }
}
