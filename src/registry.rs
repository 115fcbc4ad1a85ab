//! Pre-defined competitions and their download commands

/// Command prefix every accepted raw download command must contain
pub const KAGGLE_API_CMD: &str = "kaggle competitions download -c";

/// Pre-defined competitions: short name to full download command
const COMPETITIONS: &[(&str, &str)] = &[
    (
        "bulldozers",
        "kaggle competitions download -c bluebook-for-bulldozers",
    ),
    ("titanic", "kaggle competitions download -c titanic"),
];

/// Read-only lookup table of known competitions
///
/// Entries are fixed at compile time; there is no runtime registration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompetitionRegistry;

impl CompetitionRegistry {
    /// The built-in registry
    pub fn builtin() -> Self {
        Self
    }

    /// Full download command for a competition short name
    pub fn command(&self, name: &str) -> Option<&'static str> {
        COMPETITIONS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, command)| *command)
    }

    /// Whether `name` is a registered short name
    pub fn contains(&self, name: &str) -> bool {
        self.command(name).is_some()
    }

    /// Registered short names, in declaration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        COMPETITIONS.iter().map(|(key, _)| *key)
    }
}
