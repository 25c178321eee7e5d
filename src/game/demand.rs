use crate::Probability;
use crate::Topic;
use rand::Rng;

/// A demand distribution over topics.
///
/// Each entry is the fraction of total audience attention available on
/// that topic, so the weights are non-negative and sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Demand(Vec<Probability>);

impl Demand {
    /// L1-normalize a vector of non-negative weights.
    /// A massless vector has nothing to spread and yields None.
    pub fn normalized(weights: Vec<Probability>) -> Option<Self> {
        assert!(weights.iter().all(|w| *w >= 0.));
        let mass = weights.iter().sum::<Probability>();
        if mass > 0. {
            Some(Self(weights.iter().map(|w| w / mass).collect()))
        } else {
            None
        }
    }

    /// draw a uniform random distribution over m topics,
    /// resampling the massless draw
    pub fn random(m: usize) -> Self {
        let mut rng = rand::rng();
        loop {
            let weights = (0..m).map(|_| rng.random::<Probability>()).collect();
            if let Some(demand) = Self::normalized(weights) {
                return demand;
            }
        }
    }

    /// the fraction of attention available on this topic
    pub fn share(&self, topic: Topic) -> Probability {
        self.0[topic]
    }

    /// number of topics carrying demand
    pub fn m(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for Demand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ref weights = self
            .0
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let demand = Demand::random(8);
        let mass = (0..8).map(|k| demand.share(k)).sum::<Probability>();
        assert!((mass - 1.).abs() < 1e-9);
    }

    #[test]
    fn weights_are_nonnegative() {
        let demand = Demand::random(8);
        assert!((0..8).all(|k| demand.share(k) >= 0.));
    }

    #[test]
    fn massless_weights_are_rejected() {
        assert!(Demand::normalized(vec![0., 0., 0.]).is_none());
    }

    #[test]
    fn normalization_preserves_ratios() {
        let demand = Demand::normalized(vec![2., 1., 1.]).unwrap();
        assert!((demand.share(0) - 0.5).abs() < 1e-9);
        assert!((demand.share(1) - 0.25).abs() < 1e-9);
        assert!((demand.share(2) - 0.25).abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn negative_weights_are_a_defect() {
        Demand::normalized(vec![0.5, -0.5]);
    }
}
