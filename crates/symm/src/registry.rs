use std::{error::Error, fmt::Display};

use crate::{
    point_group::{CharacterTable, TableError},
    render::Render,
    tables::BUILTIN,
};

#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// the requested label is not registered
    NotFound(String),
    /// the same label was registered twice
    Duplicate(String),
    /// one of the built-in tables is malformed
    Table(TableError),
}

impl RegistryError {
    /// Returns `true` if the registry error is [`NotFound`].
    ///
    /// [`NotFound`]: RegistryError::NotFound
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(..))
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound(label) => {
                write!(f, "point group {label} not found")
            }
            RegistryError::Duplicate(label) => {
                write!(f, "point group {label} registered more than once")
            }
            RegistryError::Table(e) => write!(f, "{e}"),
        }
    }
}

impl Error for RegistryError {}

impl From<TableError> for RegistryError {
    fn from(value: TableError) -> Self {
        Self::Table(value)
    }
}

/// an ordered, read-only mapping from point group labels to descriptors.
/// built once at startup and then only queried
#[derive(Debug)]
pub struct Registry<D: Render = CharacterTable> {
    entries: Vec<(String, D)>,
}

impl<D: Render> Registry<D> {
    /// build a `Registry` from `entries`, keeping their order. labels must be
    /// unique
    pub fn new(entries: Vec<(String, D)>) -> Result<Self, RegistryError> {
        for (i, (label, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(l, _)| l == label) {
                return Err(RegistryError::Duplicate(label.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// find the descriptor registered under `label`. the match is exact, so
    /// `c2v` does not find `C2v`
    pub fn get(&self, label: &str) -> Result<&D, RegistryError> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, d)| d)
            .ok_or_else(|| RegistryError::NotFound(label.to_owned()))
    }

    /// the registered labels, in registration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &D)> {
        self.entries.iter().map(|(l, d)| (l.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Registry<CharacterTable> {
    /// load all of the built-in character tables
    pub fn standard() -> Result<Self, RegistryError> {
        let mut entries = Vec::with_capacity(BUILTIN.len());
        for (label, build) in BUILTIN {
            entries.push((label.to_owned(), build()?));
        }
        log::trace!("loaded {} point groups", entries.len());
        Self::new(entries)
    }
}
