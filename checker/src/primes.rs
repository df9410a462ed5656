use crate::{CheckerError, Prime, Result};

/// Trial division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// The first `count` primes, strictly increasing from 2.
pub fn generate_primes(count: usize) -> Vec<Prime> {
    let mut primes = Vec::with_capacity(count);
    let mut n: u64 = 2;
    while primes.len() < count {
        if is_prime(n) {
            primes.push(n);
        }
        n += 1;
    }
    primes
}

/// Like [`generate_primes`] but for counts arriving from untyped input.
pub fn checked_generate_primes(count: i64) -> Result<Vec<Prime>> {
    let count = usize::try_from(count).map_err(|_| {
        CheckerError::InvalidArgument(format!("prime count must be non-negative, got {count}"))
    })?;
    Ok(generate_primes(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_five() {
        assert_eq!(generate_primes(5), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_primes(0).is_empty());
    }

    #[test]
    fn small_numbers() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(!is_prime(4));
        assert!(!is_prime(49));
        assert!(is_prime(97));
    }

    #[test]
    fn bound_does_not_overflow_near_max() {
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(u64::MAX - 1));
        // 2^32 + 15, smallest prime above 2^32
        assert!(is_prime(4_294_967_311));
        // 65521 * 65537, both factors near the square root
        assert!(!is_prime(4_294_049_777));
    }

    #[test]
    fn negative_count_rejected() {
        assert!(matches!(checked_generate_primes(-1), Err(CheckerError::InvalidArgument(_))));
        assert_eq!(checked_generate_primes(3).unwrap(), vec![2, 3, 5]);
    }

    #[test]
    fn strictly_increasing_primes() {
        let primes = generate_primes(200);
        assert_eq!(primes.len(), 200);
        assert!(primes.windows(2).all(|w| w[0] < w[1]));
        assert!(primes.iter().all(|&p| is_prime(p)));
        assert_eq!(primes[199], 1223);
    }
}
