use super::demand::Demand;
use super::profile::Profile;
use super::quality::Quality;
use crate::MAX_QUALITY;
use crate::MIN_QUALITY;
use crate::N;
use crate::Player;
use crate::Probability;
use crate::Topic;
use crate::Utility;

/// product of per-player utilities (Nash social welfare)
pub fn nsw(utilities: &[Utility]) -> Utility {
    utilities.iter().product()
}

/// sum of per-player utilities (utilitarian social welfare)
pub fn sw(utilities: &[Utility]) -> Utility {
    utilities.iter().sum()
}

/// One sampled attention game.
///
/// Couples a demand distribution over topics with each player's quality
/// on every topic. Rule methods are pure functions of the instance; it
/// never mutates after sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    demand: Demand,
    quality: Quality,
}

impl Game {
    pub fn new(demand: Demand, quality: Quality) -> Self {
        assert!(quality.rows() == N);
        assert!(quality.cols() == demand.m());
        Self { demand, quality }
    }

    /// draw a fresh instance over m topics
    pub fn random(m: usize) -> Self {
        Self::new(
            Demand::random(m),
            Quality::sample(N, m, MIN_QUALITY..MAX_QUALITY),
        )
    }

    pub fn n(&self) -> usize {
        N
    }
    pub fn m(&self) -> usize {
        self.demand.m()
    }
    pub fn demand(&self) -> &Demand {
        &self.demand
    }
    pub fn quality(&self) -> &Quality {
        &self.quality
    }

    /// the fraction of the topic's demand this player captures under this
    /// profile. the whole profile competes for a single winner: the highest
    /// quality among all players on their own targeted topics takes the
    /// topic's demand, split evenly across ties.
    pub fn exposure(&self, player: Player, topic: Topic, profile: &Profile) -> Probability {
        assert!(
            profile[player] == topic,
            "player {} targets topic {} under {}, not {}",
            player,
            profile[player],
            profile,
            topic
        );
        let best = (0..self.n())
            .map(|i| self.quality.grade(i, profile[i]))
            .fold(Utility::NEG_INFINITY, Utility::max);
        let crowd = (0..self.n())
            .filter(|&i| self.quality.grade(i, profile[i]) == best)
            .count();
        if self.quality.grade(player, topic) == best {
            self.demand.share(topic) / crowd as Probability
        } else {
            0.
        }
    }

    /// the payoff for targeting a topic: exposure scaled by the quality
    /// cell addressed by the profile's own topic pair (a0, a1), NOT by the
    /// queried player's entry. a profile whose first topic is not a valid
    /// row of the quality matrix has no such cell, and the lookup aborts.
    pub fn payoff(&self, player: Player, topic: Topic, profile: &Profile) -> Utility {
        assert!(
            profile[player] == topic,
            "player {} targets topic {} under {}, not {}",
            player,
            profile[player],
            profile,
            topic
        );
        assert!(
            profile[0] < self.quality.rows(),
            "no quality row {} to scale the payoff at {}",
            profile[0],
            profile
        );
        self.exposure(player, topic, profile) * self.quality.grade(profile[0], profile[1])
    }

    /// realized per-player utilities under this profile
    pub fn utilities(&self, profile: &Profile) -> Vec<Utility> {
        (0..self.n())
            .map(|p| self.payoff(p, profile[p], profile))
            .collect()
    }

    /// Nash social welfare under this profile
    pub fn welfare(&self, profile: &Profile) -> Utility {
        nsw(&self.utilities(profile))
    }

    /// the welfare-maximal candidate, keeping the first encountered on
    /// ties so a fixed candidate order reproduces a fixed selection
    pub fn optimum(&self, candidates: &[Profile]) -> Option<Profile> {
        let mut best: Option<(Utility, Profile)> = None;
        for candidate in candidates {
            let welfare = self.welfare(candidate);
            if best.map_or(true, |(incumbent, _)| welfare > incumbent) {
                best = Some((welfare, *candidate));
            }
        }
        best.map(|(_, profile)| profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3 topics; player 1 dominates topic 0, player 0 dominates topic 2,
    /// both tie on topic 1.
    fn lopsided() -> Game {
        Game::new(
            Demand::normalized(vec![0.5, 0.3, 0.2]).unwrap(),
            Quality::from(vec![vec![0.1, 0.4, 0.8], vec![0.9, 0.4, 0.2]]),
        )
    }

    /// 2 topics with equal quality columns, so every shared topic splits.
    fn symmetric() -> Game {
        Game::new(
            Demand::normalized(vec![0.8, 0.2]).unwrap(),
            Quality::from(vec![vec![2., 5.], vec![2., 5.]]),
        )
    }

    #[test]
    fn exposure_goes_to_the_winner() {
        let game = lopsided();
        let ref profile = Profile::from((2, 0));
        assert!(game.exposure(0, 2, profile) == 0.);
        assert!(game.exposure(1, 0, profile) == 0.5);
    }

    #[test]
    fn exposure_splits_ties_evenly() {
        let game = lopsided();
        let ref profile = Profile::from((1, 1));
        assert!(game.exposure(0, 1, profile) == 0.15);
        assert!(game.exposure(1, 1, profile) == 0.15);
    }

    #[test]
    fn exposure_never_exceeds_demand() {
        let game = lopsided();
        for ref profile in Profile::lattice(game.m()) {
            for player in 0..game.n() {
                let topic = profile[player];
                let exposure = game.exposure(player, topic, profile);
                assert!(exposure >= 0.);
                assert!(exposure <= game.demand().share(topic));
            }
        }
    }

    #[test]
    #[should_panic]
    fn exposure_requires_the_assigned_topic() {
        lopsided().exposure(0, 1, &Profile::from((0, 0)));
    }

    #[test]
    fn payoff_scales_by_the_topic_pair_cell() {
        let game = lopsided();
        let ref profile = Profile::from((1, 2));
        // the scaling cell is quality[1][2] = 0.2, addressed by the topic
        // pair, not player 0's own quality[0][1] = 0.4
        assert!(game.payoff(0, 1, profile) == 0.3 * 0.2);
        assert!(game.payoff(1, 2, profile) == 0.);
    }

    #[test]
    #[should_panic]
    fn payoff_requires_a_quality_row() {
        lopsided().payoff(0, 2, &Profile::from((2, 1)));
    }

    #[test]
    fn welfare_is_the_product_of_utilities() {
        let game = symmetric();
        let ref profile = Profile::from((0, 0));
        let utilities = game.utilities(profile);
        assert!(utilities == vec![0.8, 0.8]);
        assert!((game.welfare(profile) - 0.64).abs() < 1e-9);
        assert!((sw(&utilities) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn optimum_prefers_higher_welfare() {
        let game = symmetric();
        let candidates = vec![Profile::from((1, 1)), Profile::from((0, 0))];
        // welfare 0.25 at (1, 1) against 0.64 at (0, 0)
        assert!(game.optimum(&candidates) == Some(Profile::from((0, 0))));
    }

    #[test]
    fn optimum_keeps_the_first_on_ties() {
        let game = lopsided();
        // both candidates realize zero welfare
        let candidates = vec![Profile::from((0, 0)), Profile::from((1, 0))];
        assert!(game.optimum(&candidates) == Some(Profile::from((0, 0))));
    }

    #[test]
    fn optimum_of_nothing_is_nothing() {
        assert!(lopsided().optimum(&[]).is_none());
    }
}
