use crate::game::Game;
use crate::game::Profile;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// The pair of deviation graphs over the full profile lattice.
///
/// An edge a -> b in the better graph is a unilateral deviation that
/// strictly improves the deviator's exposure; the worse graph carries
/// every edge reversed. Both graphs hold every profile as a node, so
/// node iteration follows the lexicographic profile order and rebuilding
/// from the same game reproduces the same structure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dynamics {
    better: BTreeMap<Profile, BTreeSet<Profile>>,
    worse: BTreeMap<Profile, BTreeSet<Profile>>,
}

impl From<&Game> for Dynamics {
    fn from(game: &Game) -> Self {
        let m = game.m();
        let mut graphs = Self {
            better: Profile::lattice(m).map(|p| (p, BTreeSet::new())).collect(),
            worse: Profile::lattice(m).map(|p| (p, BTreeSet::new())).collect(),
        };
        for ref profile in Profile::lattice(m) {
            for player in 0..game.n() {
                let held = game.exposure(player, profile[player], profile);
                for topic in (0..m).filter(|&t| t != profile[player]) {
                    let deviation = profile.play(player, topic);
                    if game.exposure(player, topic, &deviation) > held {
                        graphs
                            .better
                            .get_mut(profile)
                            .expect("lattice node")
                            .insert(deviation);
                        graphs
                            .worse
                            .get_mut(&deviation)
                            .expect("lattice node")
                            .insert(*profile);
                    }
                }
            }
        }
        graphs
    }
}

impl Dynamics {
    /// every profile, in lexicographic order
    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.better.keys()
    }

    /// deviations that strictly improve from this profile
    pub fn improvements(&self, profile: &Profile) -> &BTreeSet<Profile> {
        &self.better[profile]
    }

    /// deviations that strictly worsen from this profile
    pub fn regressions(&self, profile: &Profile) -> &BTreeSet<Profile> {
        &self.worse[profile]
    }

    /// pure Nash equilibria: profiles from which nobody improves
    pub fn equilibria(&self) -> Vec<Profile> {
        self.better
            .iter()
            .filter(|(_, improvements)| improvements.is_empty())
            .map(|(profile, _)| *profile)
            .collect()
    }
}
