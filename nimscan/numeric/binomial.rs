//! Closed-form position counts

/// Binomial coefficient `C(n, k)`, `None` if it does not fit in `u128`.
///
/// Uses the multiplicative formula, every intermediate quotient is an integer so the result is
/// exact.
pub fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k {
        // acc * (n - k + i) is always divisible by i, keep the division exact by splitting off
        // the common factor before multiplying
        let numerator = n - k + i;
        let g = gcd(acc, i);
        let (acc_reduced, i_reduced) = (acc / g, i / g);
        acc = acc_reduced.checked_mul(numerator / i_reduced)?;
    }
    Some(acc)
}

/// Number of multisets of size `arity` over `domain_size` symbols, i.e. number of non-decreasing
/// positions.
///
/// `C(domain_size + arity - 1, arity)`. There is exactly one empty position, even over an empty
/// domain.
pub fn count_positions(domain_size: usize, arity: usize) -> Option<u128> {
    if arity == 0 {
        return Some(1);
    }
    if domain_size == 0 {
        return Some(0);
    }
    binomial(domain_size as u128 + arity as u128 - 1, arity as u128)
}

/// Number of ordered positions of length `arity` over `domain_size` symbols, `domain_size^arity`
pub fn count_tuples(domain_size: usize, arity: usize) -> Option<u128> {
    let arity = u32::try_from(arity).ok()?;
    (domain_size as u128).checked_pow(arity)
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_triangle() {
        for n in 1..40u128 {
            for k in 1..n {
                assert_eq!(
                    binomial(n, k),
                    Some(binomial(n - 1, k - 1).unwrap() + binomial(n - 1, k).unwrap()),
                    "C({n}, {k})"
                );
            }
        }
    }

    #[test]
    fn edges() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(5, 5), Some(1));
        assert_eq!(binomial(5, 6), Some(0));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(binomial(1000, 500), None);
    }

    #[test]
    fn multiset_counts() {
        assert_eq!(count_positions(7, 2), Some(28));
        assert_eq!(count_positions(5, 3), Some(35));
        assert_eq!(count_positions(0, 0), Some(1));
        assert_eq!(count_positions(0, 3), Some(0));
        assert_eq!(count_positions(4, 0), Some(1));
        assert_eq!(count_positions(1, 10), Some(1));
    }

    #[test]
    fn tuple_counts() {
        assert_eq!(count_tuples(5, 3), Some(125));
        assert_eq!(count_tuples(0, 0), Some(1));
        assert_eq!(count_tuples(0, 2), Some(0));
        assert_eq!(count_tuples(10, 50), None);
    }
}
