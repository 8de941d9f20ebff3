use std::{fmt::Display, str::FromStr};

/// a function transforming as an irrep, as listed in the last two columns of
/// a character table
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Basis {
    /// a lone function like `z` or `x2+y2`
    Single(String),
    /// a degenerate set like `(x, y)`
    Set(Vec<String>),
}

impl FromStr for Basis {
    type Err = ();

    /// `"(x, y)"` parses to a [Basis::Set], anything else to a
    /// [Basis::Single]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(());
        }
        match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => Ok(Basis::Set(
                inner.split(',').map(|f| f.trim().to_owned()).collect(),
            )),
            None => Ok(Basis::Single(s.to_owned())),
        }
    }
}

impl Display for Basis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Basis::Single(s) => write!(f, "{s}"),
            Basis::Set(v) => write!(f, "({})", v.join(", ")),
        }
    }
}

/// an irreducible representation: its label and the functions transforming
/// like it. the characters themselves live in the owning
/// [CharacterTable](crate::CharacterTable)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Irrep {
    pub name: String,
    pub lin_rot: Vec<Basis>,
    pub quad: Vec<Basis>,
}

fn parse_bases(v: &[&str]) -> Vec<Basis> {
    v.iter().filter_map(|s| s.parse().ok()).collect()
}

fn join(v: &[Basis]) -> String {
    v.iter().map(|b| b.to_string()).collect::<Vec<_>>().join(", ")
}

impl Irrep {
    /// build an `Irrep` from its name and string forms of its linear/rotation
    /// and quadratic functions. empty strings are dropped
    pub fn new(name: &str, lin_rot: &[&str], quad: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            lin_rot: parse_bases(lin_rot),
            quad: parse_bases(quad),
        }
    }

    /// the dimension of the irrep, deduced from the Mulliken symbol. panics
    /// if the symbol doesn't start with one of A, B, E, T, G, or H
    pub fn degeneracy(&self) -> usize {
        match self.name.chars().next() {
            Some('A' | 'B') => 1,
            Some('E') => 2,
            Some('T') => 3,
            Some('G') => 4,
            Some('H') => 5,
            _ => panic!("unrecognized Mulliken symbol {}", self.name),
        }
    }

    /// Returns `true` if `self` is one half of a separably degenerate pair,
    /// like `E_a` or `E_1b` in the cyclic groups
    pub fn is_split(&self) -> bool {
        self.name
            .rsplit_once('_')
            .is_some_and(|(_, tag)| tag.ends_with(['a', 'b']))
    }

    pub fn lin_rot_str(&self) -> String {
        join(&self.lin_rot)
    }

    pub fn quad_str(&self) -> String {
        join(&self.quad)
    }
}

impl Display for Irrep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.name)
    }
}
