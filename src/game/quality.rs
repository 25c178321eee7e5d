use crate::Utility;
use rand::Rng;
use std::ops::Range;

/// Per-player production quality on each topic.
///
/// Row i holds player i's quality on every topic; entries are
/// non-negative and all rows share the same width.
#[derive(Debug, Clone, PartialEq)]
pub struct Quality(Vec<Vec<Utility>>);

impl Quality {
    /// draw an n x m matrix uniformly over the given range
    pub fn sample(n: usize, m: usize, range: Range<Utility>) -> Self {
        let mut rng = rand::rng();
        Self(
            (0..n)
                .map(|_| (0..m).map(|_| rng.random_range(range.clone())).collect())
                .collect(),
        )
    }

    /// the entry at the given row and column
    pub fn grade(&self, row: usize, col: usize) -> Utility {
        self.0[row][col]
    }

    pub fn rows(&self) -> usize {
        self.0.len()
    }

    pub fn cols(&self) -> usize {
        self.0.first().map(Vec::len).unwrap_or(0)
    }
}

impl From<Vec<Vec<Utility>>> for Quality {
    fn from(rows: Vec<Vec<Utility>>) -> Self {
        assert!(rows.iter().all(|row| row.len() == rows[0].len()));
        assert!(rows.iter().flatten().all(|q| *q >= 0.));
        Self(rows)
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ref rows = self
            .0
            .iter()
            .map(|row| {
                row.iter()
                    .map(|q| q.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_range() {
        let quality = Quality::sample(2, 16, 3.0..4.0);
        assert!((0..2).all(|i| (0..16).all(|j| quality.grade(i, j) >= 3.0)));
        assert!((0..2).all(|i| (0..16).all(|j| quality.grade(i, j) < 4.0)));
    }

    #[test]
    fn dimensions_follow_the_draw() {
        let quality = Quality::sample(2, 5, 0.0..1.0);
        assert!(quality.rows() == 2);
        assert!(quality.cols() == 5);
    }

    #[test]
    #[should_panic]
    fn negative_entries_are_a_defect() {
        Quality::from(vec![vec![1., -1.]]);
    }

    #[test]
    #[should_panic]
    fn ragged_rows_are_a_defect() {
        Quality::from(vec![vec![1., 2.], vec![3.]]);
    }
}
