use std::collections::BTreeSet;

/// How a key in a chain is computed from the key right before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// `x^(2p) = x^p * x^p`
    Square,

    /// `x^(p+1) = x^p * x`
    MultiplyByInput,
}

impl Step {
    /// Classifies the step from `prev` to `cur`. Squaring wins when both apply (1 -> 2).
    ///
    /// Panics if `cur` can't be reached from `prev` with a single multiplication, since that
    /// means the decomposition produced a broken chain.
    pub fn classify(prev: u32, cur: u32) -> Step {
        if prev.checked_mul(2) == Some(cur) {
            Step::Square
        } else if prev.checked_add(1) == Some(cur) {
            Step::MultiplyByInput
        } else {
            panic!(
                "broken exponent chain: x^{} cannot be computed from x^{}",
                cur, prev
            );
        }
    }
}

/// The ascending exponents needed to compute `x^n`, starting at `x^1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    exponent: u32,
    keys: Vec<u32>,
}

impl Chain {
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn keys(&self) -> &[u32] {
        &self.keys
    }

    pub fn contains(&self, key: u32) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    /// Iterates over every `(previous, current, step)` pair of neighbouring keys.
    pub fn steps(&self) -> impl '_ + Iterator<Item = (u32, u32, Step)> {
        self.keys
            .windows(2)
            .map(|pair| (pair[0], pair[1], Step::classify(pair[0], pair[1])))
    }

    /// Number of multiplications a routine following this chain performs.
    pub fn multiplications(&self) -> usize {
        self.keys.len().saturating_sub(1)
    }

    #[cfg(test)]
    pub(crate) fn from_keys(keys: Vec<u32>) -> Chain {
        Chain {
            exponent: keys.last().copied().unwrap_or(0),
            keys,
        }
    }
}

/// Decomposes `n` into its halving chain: the chain of `n / 2` plus `n` and `2 * (n / 2)`.
///
/// Every call starts from an empty set; nothing is shared between exponents.
pub fn decompose(n: u32) -> Chain {
    let keys = collect_keys(n, BTreeSet::new());

    Chain {
        exponent: n,
        keys: keys.into_iter().collect(),
    }
}

fn collect_keys(n: u32, mut keys: BTreeSet<u32>) -> BTreeSet<u32> {
    if n <= 1 {
        keys.insert(n);
        return keys;
    }

    if keys.contains(&n) {
        return keys;
    }

    let half = n / 2;
    keys = collect_keys(half, keys);
    keys.insert(n);
    keys.insert(2 * half);
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_one_and_exponent() {
        for n in 1..=20 {
            let chain = decompose(n);
            assert!(chain.contains(1), "chain for {} is missing 1", n);
            assert!(chain.contains(n), "chain for {} is missing {}", n, n);
            assert_eq!(chain.exponent(), n);
            assert_eq!(chain.keys().last(), Some(&n));
        }
    }

    #[test]
    fn contains_half_and_double_half() {
        for n in 2..=64 {
            let chain = decompose(n);
            let half = n / 2;
            assert!(chain.contains(half), "chain for {} is missing {}", n, half);
            assert!(chain.contains(2 * half), "chain for {} is missing {}", n, 2 * half);
        }
    }

    #[test]
    fn contains_chain_of_half() {
        for n in 2..=64 {
            let chain = decompose(n);
            for key in decompose(n / 2).keys() {
                assert!(chain.contains(*key));
            }
        }
    }

    #[test]
    fn keys_are_strictly_ascending() {
        for n in 1..=64 {
            let chain = decompose(n);
            assert!(chain.keys().windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn small_chains() {
        assert_eq!(decompose(1).keys(), &[1]);
        assert_eq!(decompose(2).keys(), &[1, 2]);
        assert_eq!(decompose(3).keys(), &[1, 2, 3]);
        assert_eq!(decompose(4).keys(), &[1, 2, 4]);
        assert_eq!(decompose(7).keys(), &[1, 2, 3, 6, 7]);
        assert_eq!(decompose(20).keys(), &[1, 2, 4, 5, 10, 20]);
    }

    #[test]
    fn zero_is_a_base_case() {
        assert_eq!(decompose(0).keys(), &[0]);
        assert_eq!(decompose(0).multiplications(), 0);
    }

    #[test]
    fn decompose_is_deterministic() {
        for n in 1..=20 {
            assert_eq!(decompose(n), decompose(n));
        }
    }

    #[test]
    fn steps_follow_parity() {
        let steps: Vec<_> = decompose(7).steps().collect();
        assert_eq!(
            steps,
            vec![
                (1, 2, Step::Square),
                (2, 3, Step::MultiplyByInput),
                (3, 6, Step::Square),
                (6, 7, Step::MultiplyByInput),
            ]
        );

        let steps: Vec<_> = decompose(16).steps().map(|(_, _, step)| step).collect();
        assert_eq!(steps, vec![Step::Square; 4]);
    }

    #[test]
    fn odd_exponents_need_one_extra_multiplication() {
        for n in (2..=40).step_by(2) {
            assert_eq!(
                decompose(n + 1).multiplications(),
                decompose(n).multiplications() + 1
            );
        }
    }

    #[test]
    fn every_chain_is_well_formed() {
        for n in 1..=256 {
            assert_eq!(decompose(n).steps().count(), decompose(n).multiplications());
        }
    }

    #[test]
    #[should_panic(expected = "broken exponent chain")]
    fn broken_chain_panics() {
        let chain = Chain::from_keys(vec![1, 2, 5]);
        let _ = chain.steps().count();
    }
}
