use num::{BigInt, One};

/// Returns `n choose k` exactly (zero if `k > n`)
pub fn binomial(n: u64, k: u64) -> BigInt {
    if k > n {
        return BigInt::from(0);
    }
    let k = k.min(n - k);
    let mut result = BigInt::one();
    for i in 0..k {
        result *= n - i;
        result /= i + 1;
    }
    result
}

/// Returns `n choose k` if it fits into an `u64` (zero if `k > n`)
pub fn checked_binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        // multiplying first keeps every intermediate value an integer
        result = u64::try_from(u128::from(result) * u128::from(n - i) / u128::from(i + 1)).ok()?;
    }
    Some(result)
}

/// Returns `n!` exactly
pub fn factorial(n: u64) -> BigInt {
    (2..=n).fold(BigInt::one(), |acc, i| acc * i)
}

/// Returns `n!` if it fits into an `u64`
pub fn checked_factorial(n: u64) -> Option<u64> {
    (2..=n).try_fold(1u64, |acc, i| acc.checked_mul(i))
}

/// Returns `2^n` if it fits into an `u64`
pub fn checked_two_power(n: u32) -> Option<u64> {
    1u64.checked_shl(n)
}

/// Returns `2^n`, saturating at `u64::MAX`
pub fn saturating_two_power(n: u32) -> u64 {
    checked_two_power(n).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomials() {
        assert_eq!(binomial(5, 2), BigInt::from(10));
        assert_eq!(binomial(5, 7), BigInt::from(0));
        assert_eq!(binomial(0, 0), BigInt::from(1));
        assert_eq!(checked_binomial(60, 30), Some(118264581564861424));
        assert_eq!(
            binomial(100, 50).to_string(),
            "100891344545564193334812497256"
        );
        assert_eq!(checked_binomial(100, 50), None);

        for n in 0..30 {
            for k in 0..=n {
                assert_eq!(
                    BigInt::from(checked_binomial(n, k).unwrap()),
                    binomial(n, k)
                );
            }
        }
    }

    #[test]
    fn factorials() {
        assert_eq!(checked_factorial(0), Some(1));
        assert_eq!(checked_factorial(1), Some(1));
        assert_eq!(checked_factorial(12), Some(479001600));
        assert_eq!(checked_factorial(20), Some(2432902008176640000));
        assert_eq!(checked_factorial(21), None);
        assert_eq!(factorial(21).to_string(), "51090942171709440000");
    }

    #[test]
    fn powers() {
        assert_eq!(checked_two_power(10), Some(1024));
        assert_eq!(checked_two_power(64), None);
        assert_eq!(saturating_two_power(70), u64::MAX);
    }
}
