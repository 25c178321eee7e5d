use crate::N;
use crate::Utility;
use crate::game::Demand;
use crate::game::Game;
use crate::game::Profile;
use crate::game::Quality;

/// A saved game file could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedGameFile(String);

impl std::fmt::Display for MalformedGameFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed game file: {}", self.0)
    }
}

impl std::error::Error for MalformedGameFile {}

/// A discovered game worth keeping: the instance, a start profile, an
/// end profile, and the improvement path connecting them.
///
/// The layout is line-oriented text: a `n m pathLength` header, the
/// demand row, the quality rows, the start and end profiles, then one
/// line per path node. `Display` writes the layout and `TryFrom<&str>`
/// reads it back; the two are inverses up to floating re-normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub game: Game,
    pub start: Profile,
    pub end: Profile,
    pub path: Vec<Profile>,
}

impl Record {
    pub fn save(&self, path: &std::path::Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::try_from(text.as_str())?)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {} {}", self.game.n(), self.game.m(), self.path.len())?;
        writeln!(f, "{}", self.game.demand())?;
        writeln!(f, "{}", self.game.quality())?;
        writeln!(f, "{}", fields(&self.start))?;
        writeln!(f, "{}", fields(&self.end))?;
        for node in self.path.iter() {
            writeln!(f, "{}", fields(node))?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Record {
    type Error = MalformedGameFile;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let ref mut lines = text.lines();
        let header = integers(next(lines, "header")?, "header")?;
        let [n, m, hops] = header[..] else {
            return Err(MalformedGameFile(format!(
                "header holds {} fields, not 3",
                header.len()
            )));
        };
        if n != N {
            return Err(MalformedGameFile(format!("{} players unsupported", n)));
        }
        if m == 0 {
            return Err(MalformedGameFile("no topics".to_string()));
        }
        let demand = demand(next(lines, "demand")?, m)?;
        let quality = (0..n)
            .map(|i| row(next(lines, "quality")?, m, i))
            .collect::<Result<Vec<_>, _>>()?;
        let start = profile(next(lines, "start")?, m, "start")?;
        let end = profile(next(lines, "end")?, m, "end")?;
        let path = (0..hops)
            .map(|_| profile(next(lines, "path")?, m, "path"))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            game: Game::new(demand, Quality::from(quality)),
            start,
            end,
            path,
        })
    }
}

/// profiles serialize as bare space-separated topic indices
fn fields(profile: &Profile) -> String {
    profile
        .choices()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn next<'a>(lines: &mut std::str::Lines<'a>, field: &str) -> Result<&'a str, MalformedGameFile> {
    lines
        .next()
        .ok_or_else(|| MalformedGameFile(format!("missing {} line", field)))
}

fn integers(line: &str, field: &str) -> Result<Vec<usize>, MalformedGameFile> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| MalformedGameFile(format!("{} holds non-integer '{}'", field, token)))
        })
        .collect()
}

fn reals(line: &str, field: &str) -> Result<Vec<Utility>, MalformedGameFile> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<Utility>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    MalformedGameFile(format!("{} holds non-numeric '{}'", field, token))
                })
        })
        .collect()
}

fn demand(line: &str, m: usize) -> Result<Demand, MalformedGameFile> {
    let weights = reals(line, "demand")?;
    if weights.len() != m {
        return Err(MalformedGameFile(format!(
            "demand holds {} weights, not {}",
            weights.len(),
            m
        )));
    }
    if weights.iter().any(|w| *w < 0.) {
        return Err(MalformedGameFile("demand holds negative weight".to_string()));
    }
    Demand::normalized(weights).ok_or_else(|| MalformedGameFile("demand carries no mass".to_string()))
}

fn row(line: &str, m: usize, index: usize) -> Result<Vec<Utility>, MalformedGameFile> {
    let grades = reals(line, "quality")?;
    if grades.len() != m {
        return Err(MalformedGameFile(format!(
            "quality row {} holds {} entries, not {}",
            index,
            grades.len(),
            m
        )));
    }
    if grades.iter().any(|q| *q < 0.) {
        return Err(MalformedGameFile(format!(
            "quality row {} holds negative entry",
            index
        )));
    }
    Ok(grades)
}

fn profile(line: &str, m: usize, field: &str) -> Result<Profile, MalformedGameFile> {
    let topics = integers(line, field)?;
    let [i, j] = topics[..] else {
        return Err(MalformedGameFile(format!(
            "{} holds {} topics, not {}",
            field,
            topics.len(),
            N
        )));
    };
    if i >= m || j >= m {
        return Err(MalformedGameFile(format!(
            "{} targets a topic outside [0, {})",
            field, m
        )));
    }
    Ok(Profile::from((i, j)))
}
