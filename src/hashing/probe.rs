use crate::error::Error;
use std::str::FromStr;

/// Constants of the quadratic probe: `slot(i) = h + C1*i + C2*i^2`.
const QUADRATIC_C1: u64 = 3;
const QUADRATIC_C2: u64 = 5;

/// Probe sequence used by open addressing to pick the i-th candidate slot for
/// a key. Stateless apart from the selected variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProbeStrategy {
    Linear,
    Quadratic,
    /// Secondary displacement hash `1 + (h mod (capacity - 1))`.
    DoubleHash,
}

impl ProbeStrategy {
    /// Computes the candidate slot for `hash` at the given attempt.
    /// `capacity` must be non zero.
    #[inline]
    pub fn probe(&self, hash: u64, attempt: usize, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        let i = attempt as u64;
        let max = capacity as u64;

        let slot = match self {
            ProbeStrategy::Linear => ((hash % max) + (i % max)) % max,
            ProbeStrategy::Quadratic => {
                let c1 = (QUADRATIC_C1 * (i % max)) % max;
                let c2 = (QUADRATIC_C2 * (i.pow(2) % max)) % max;
                ((hash % max) + c1 + c2) % max
            }
            ProbeStrategy::DoubleHash => {
                let step = if max > 1 { 1 + (hash % (max - 1)) } else { 1 };
                ((hash % max) + ((i % max) * (step % max)) % max) % max
            }
        };

        slot as usize
    }
}

impl FromStr for ProbeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ProbeStrategy::Linear),
            "quadratic" => Ok(ProbeStrategy::Quadratic),
            "double" => Ok(ProbeStrategy::DoubleHash),
            _ => Err(Error::InvalidProbe),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn linear() {
        for i in 0..20 {
            assert_eq!(ProbeStrategy::Linear.probe(3, i, 7), (3 + i) % 7);
        }
    }

    #[test]
    fn quadratic() {
        for i in 0..20u64 {
            let expect = (3 + 3 * i + 5 * i * i) % 11;
            assert_eq!(
                ProbeStrategy::Quadratic.probe(3, i as usize, 11),
                expect as usize
            );
        }
    }

    #[test]
    fn double_hash() {
        // step = 1 + (9 % 10) = 10, capacity 11
        for i in 0..20 {
            assert_eq!(ProbeStrategy::DoubleHash.probe(9, i, 11), (9 + i * 10) % 11);
        }
    }

    #[test]
    fn probes_stay_in_bounds() {
        for strategy in [
            ProbeStrategy::Linear,
            ProbeStrategy::Quadratic,
            ProbeStrategy::DoubleHash,
        ] {
            for capacity in 1..16 {
                for i in 0..64 {
                    assert!(strategy.probe(u64::MAX - 3, i, capacity) < capacity);
                }
            }
        }
    }

    #[test]
    fn deterministic() {
        let a = ProbeStrategy::DoubleHash.probe(981723, 5, 13);
        let b = ProbeStrategy::DoubleHash.probe(981723, 5, 13);
        assert_eq!(a, b);
    }

    #[test]
    fn from_tag() {
        assert_eq!("linear".parse::<ProbeStrategy>(), Ok(ProbeStrategy::Linear));
        assert_eq!(
            "quadratic".parse::<ProbeStrategy>(),
            Ok(ProbeStrategy::Quadratic)
        );
        assert_eq!(
            "double".parse::<ProbeStrategy>(),
            Ok(ProbeStrategy::DoubleHash)
        );
        assert_eq!("cuckoo".parse::<ProbeStrategy>(), Err(Error::InvalidProbe));
        assert_eq!("".parse::<ProbeStrategy>(), Err(Error::InvalidProbe));
    }
}
