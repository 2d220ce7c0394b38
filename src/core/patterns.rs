use crate::utils::error::{DrillError, Result};
use crate::utils::validation::validate_range;

pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Star rows 3, 5, ..., n, then back down to 3.
pub fn diamond(n: usize) -> Result<Vec<String>> {
    if n < 3 || n % 2 == 0 {
        return Err(DrillError::invalid_input(format!(
            "number of rows must be an odd number of at least 3, got {}",
            n
        )));
    }
    let widths = (3..=n).step_by(2).chain((3..=n - 2).rev().step_by(2));
    Ok(widths.map(|w| "*".repeat(w)).collect())
}

pub fn swap_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}

pub fn factorial(n: i64) -> Result<u64> {
    validate_range("n", n, 0, MAX_FACTORIAL_INPUT)?;
    Ok(factorial_unchecked(n as u64))
}

fn factorial_unchecked(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    n * factorial_unchecked(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_rows() {
        assert_eq!(
            diamond(9).unwrap(),
            vec!["***", "*****", "*******", "*********", "*******", "*****", "***"]
        );
        assert_eq!(diamond(3).unwrap(), vec!["***"]);
    }

    #[test]
    fn test_diamond_rejects_even_and_small() {
        assert!(diamond(6).is_err());
        assert!(diamond(1).is_err());
    }

    #[test]
    fn test_swap_values() {
        let (mut a, mut b) = (3, 8);
        swap_values(&mut a, &mut b);
        assert_eq!((a, b), (8, 3));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
        assert!(factorial(21).is_err());
        assert!(factorial(-1).is_err());
    }
}
