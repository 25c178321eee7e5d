use crate::N;
use crate::Player;
use crate::Topic;

/// A strategy profile: the topic each player targets.
///
/// Profiles are the nodes of the deviation graphs, so they are small
/// Copy values with a total (lexicographic) order for use as map keys.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Profile([Topic; N]);

impl Profile {
    /// every profile over m topics, in lexicographic order
    pub fn lattice(m: usize) -> impl Iterator<Item = Self> {
        (0..m.pow(N as u32)).map(move |mut code| {
            let mut topics = [0; N];
            for slot in topics.iter_mut().rev() {
                *slot = code % m;
                code /= m;
            }
            Self(topics)
        })
    }

    /// unilateral deviation: this player switches to the given topic
    pub fn play(&self, player: Player, topic: Topic) -> Self {
        let mut next = self.0;
        next[player] = topic;
        Self(next)
    }

    /// the targeted topics, one per player
    pub fn choices(&self) -> impl Iterator<Item = Topic> + '_ {
        self.0.iter().copied()
    }
}

impl From<(Topic, Topic)> for Profile {
    fn from((i, j): (Topic, Topic)) -> Self {
        Self([i, j])
    }
}

impl std::ops::Index<Player> for Profile {
    type Output = Topic;
    fn index(&self, player: Player) -> &Self::Output {
        &self.0[player]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ref topics = self
            .choices()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", topics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_enumerates_in_order() {
        let profiles = Profile::lattice(2).collect::<Vec<_>>();
        assert!(
            profiles
                == vec![
                    Profile::from((0, 0)),
                    Profile::from((0, 1)),
                    Profile::from((1, 0)),
                    Profile::from((1, 1)),
                ]
        );
    }

    #[test]
    fn lattice_covers_the_square() {
        assert!(Profile::lattice(5).count() == 25);
    }

    #[test]
    fn play_moves_one_axis() {
        let profile = Profile::from((0, 2));
        assert!(profile.play(0, 1) == Profile::from((1, 2)));
        assert!(profile.play(1, 0) == Profile::from((0, 0)));
        assert!(profile[0] == 0 && profile[1] == 2);
    }
}
