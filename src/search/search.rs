use super::outcome::Outcome;
use super::outcome::Witness;
use crate::TOPIC_COUNT;
use crate::TRIAL_LIMIT;
use crate::dynamics::Atlas;
use crate::dynamics::Dynamics;
use crate::game::Game;
use rayon::prelude::*;

/// A bounded hunt for a game whose best-response dynamics strand some
/// start profile away from the welfare-optimal equilibrium.
///
/// Every trial draws a fresh instance and runs the full pipeline; state
/// never crosses trials, which is what lets `sweep` fan the same trials
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct Search {
    m: usize,
    trials: usize,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            m: TOPIC_COUNT,
            trials: TRIAL_LIMIT,
        }
    }
}

impl Search {
    pub fn new(m: usize, trials: usize) -> Self {
        assert!(m > 0);
        Self { m, trials }
    }

    /// sequential trials, stopping at the first witness
    pub fn run(&self) -> Outcome {
        log::debug!("searching {} games over {} topics", self.trials, self.m);
        for trial in 0..self.trials {
            if let Some(witness) = self.trial() {
                log::info!("witness found on trial {}", trial);
                return Outcome::Found(witness);
            }
        }
        log::debug!("exhausted {} trials without a witness", self.trials);
        Outcome::Exhausted
    }

    /// the same trials fanned across threads; whichever thread finds a
    /// witness first wins and the remaining trials are abandoned
    pub fn sweep(&self) -> Outcome {
        (0..self.trials)
            .into_par_iter()
            .find_map_any(|_| self.trial())
            .map(Outcome::Found)
            .unwrap_or(Outcome::Exhausted)
    }

    /// one full pipeline pass over a fresh game
    fn trial(&self) -> Option<Witness> {
        let game = Game::random(self.m);
        log::debug!("D = {}", game.demand());
        log::debug!("Q = {}", game.quality());
        let ref dynamics = Dynamics::from(&game);
        let equilibria = dynamics.equilibria();
        if equilibria.is_empty() {
            log::debug!("no pure equilibria, skipping trial");
            return None;
        }
        let best = game.optimum(&equilibria)?;
        let atlas = Atlas::from(dynamics);
        atlas
            .stranded(&equilibria, &best)
            .map(|start| Witness { game, start, best })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_topic_searches_exhaust() {
        // one topic admits no deviation, so every profile is an
        // equilibrium and there is never a start position
        assert!(Search::new(1, 8).run() == Outcome::Exhausted);
        assert!(Search::new(1, 8).sweep() == Outcome::Exhausted);
    }

    #[test]
    fn witnesses_are_genuine() {
        for _ in 0..32 {
            if let Outcome::Found(witness) = Search::new(2, 8).run() {
                let ref dynamics = Dynamics::from(&witness.game);
                let atlas = Atlas::from(dynamics);
                let equilibria = dynamics.equilibria();
                assert!(equilibria.contains(&witness.best));
                assert!(!equilibria.contains(&witness.start));
                assert!(!atlas.connects(&witness.start, &witness.best));
            }
        }
    }
}
