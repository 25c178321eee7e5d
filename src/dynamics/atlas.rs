use super::graph::Dynamics;
use crate::game::Profile;
use std::collections::BTreeMap;
use std::collections::VecDeque;

/// All-pairs shortest paths over the better graph.
///
/// One breadth-first expansion per source profile; each reachable target
/// keeps the full node sequence from source to target, source included.
/// The table is what reachability questions are answered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas(BTreeMap<Profile, BTreeMap<Profile, Vec<Profile>>>);

impl From<&Dynamics> for Atlas {
    fn from(dynamics: &Dynamics) -> Self {
        Self(
            dynamics
                .profiles()
                .map(|&source| (source, Self::explore(dynamics, source)))
                .collect(),
        )
    }
}

impl Atlas {
    /// breadth-first expansion from one source
    fn explore(dynamics: &Dynamics, source: Profile) -> BTreeMap<Profile, Vec<Profile>> {
        let mut paths = BTreeMap::from([(source, vec![source])]);
        let mut frontier = VecDeque::from([source]);
        while let Some(node) = frontier.pop_front() {
            for &next in dynamics.improvements(&node) {
                if !paths.contains_key(&next) {
                    let mut path = paths[&node].clone();
                    path.push(next);
                    paths.insert(next, path);
                    frontier.push_back(next);
                }
            }
        }
        paths
    }

    /// the shortest improvement path between two profiles, if any
    pub fn route(&self, from: &Profile, into: &Profile) -> Option<&Vec<Profile>> {
        self.0.get(from).and_then(|paths| paths.get(into))
    }

    /// whether any improvement path connects the two profiles
    pub fn connects(&self, from: &Profile, into: &Profile) -> bool {
        self.route(from, into).is_some()
    }

    /// the first non-equilibrium profile, in lexicographic order, from
    /// which no improvement path reaches the target
    pub fn stranded(&self, equilibria: &[Profile], target: &Profile) -> Option<Profile> {
        self.0
            .keys()
            .copied()
            .filter(|start| !equilibria.contains(start))
            .find(|start| !self.connects(start, target))
    }
}
