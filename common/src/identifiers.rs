use std::fmt;

pub const MAX_PLAYER_NAME_LEN: usize = 24;

/// Display name of a player. Opaque to the rules engine, which only knows marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trims `name` and falls back to `default` when nothing is left.
    pub fn new_or(name: &str, default: &str) -> Self {
        let trimmed = name.trim();
        let chosen = if trimmed.is_empty() { default.trim() } else { trimmed };
        Self(chosen.chars().take(MAX_PLAYER_NAME_LEN).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
