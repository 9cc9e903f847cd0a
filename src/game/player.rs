#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Red,
    Green,
}

impl PlayerColor {
    /// Get the other player
    pub fn other(self) -> PlayerColor {
        match self {
            PlayerColor::Red => PlayerColor::Green,
            PlayerColor::Green => PlayerColor::Red,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Green => "Green",
        }
    }

    /// One-letter mark used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            PlayerColor::Red => 'R',
            PlayerColor::Green => 'G',
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerColor::Red.other(), PlayerColor::Green);
        assert_eq!(PlayerColor::Green.other(), PlayerColor::Red);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(PlayerColor::Red.name(), "Red");
        assert_eq!(PlayerColor::Green.name(), "Green");
        assert_eq!(PlayerColor::Green.to_string(), "Green");
    }

    #[test]
    fn test_player_symbol() {
        assert_eq!(PlayerColor::Red.symbol(), 'R');
        assert_eq!(PlayerColor::Green.symbol(), 'G');
    }
}
