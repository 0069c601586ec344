use snake_engine::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveParseError {
    pub position: usize,
    pub character: char,
}

impl std::fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unexpected move '{}' at position {} (use U/D/L/R, ^/v/</> or '.')",
            self.character, self.position
        )
    }
}

impl std::error::Error for MoveParseError {}

/// One entry per tick; `None` keeps the current heading. Whitespace is skipped.
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>, MoveParseError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, character)| !character.is_whitespace())
        .map(|(position, character)| match character {
            'U' | 'u' | '^' => Ok(Some(Direction::Up)),
            'D' | 'd' | 'v' => Ok(Some(Direction::Down)),
            'L' | 'l' | '<' => Ok(Some(Direction::Left)),
            'R' | 'r' | '>' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            _ => Err(MoveParseError { position, character }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters_and_arrows() {
        let moves = parse_moves("UdL r^v<>.").unwrap();
        assert_eq!(
            moves,
            vec![
                Some(Direction::Up),
                Some(Direction::Down),
                Some(Direction::Left),
                Some(Direction::Right),
                Some(Direction::Up),
                Some(Direction::Down),
                Some(Direction::Left),
                Some(Direction::Right),
                None,
            ]
        );
    }

    #[test]
    fn test_whitespace_and_newlines_are_skipped() {
        let moves = parse_moves("..\n  R\t.\n").unwrap();
        assert_eq!(moves, vec![None, None, Some(Direction::Right), None]);
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse_moves("").unwrap(), vec![]);
    }

    #[test]
    fn test_unknown_character_reports_position() {
        let err = parse_moves("RR x").unwrap_err();
        assert_eq!(err, MoveParseError { position: 3, character: 'x' });
        assert!(err.to_string().contains("position 3"));
    }
}
