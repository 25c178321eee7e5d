use crate::game::Game;
use crate::game::Profile;

/// A sampled game together with a start profile that cannot reach the
/// welfare-optimal equilibrium by any chain of improving deviations.
#[derive(Debug, Clone, PartialEq)]
pub struct Witness {
    pub game: Game,
    pub start: Profile,
    pub best: Profile,
}

/// How a search ended: either some trial produced a witness, or every
/// sampled game let all of its start profiles reach the optimum.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found(Witness),
    Exhausted,
}

impl std::fmt::Display for Witness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "No path from {} to the best equilibrium {}", self.start, self.best)?;
        writeln!(f, "n = {}", self.game.n())?;
        writeln!(f, "m = {}", self.game.m())?;
        writeln!(f, "D = {}", self.game.demand())?;
        write!(f, "Q = {}", self.game.quality())
    }
}
