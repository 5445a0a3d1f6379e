//! Sheet notation encoding and decoding.
//!
//! Sheet notation is a one-line description of the stones in play, in the
//! same spirit as chess FEN. An empty sheet is `-`; otherwise stones are
//! comma-separated entries `<team><x>:<y>`, where the team is `b` or `r`.
//!
//! Example: `b300:150,r310.5:140,r120:-4`
//!
//! Entry order is preserved, since closest-stone ties are broken by it.

use crate::sheet::{Stone, Team};

/// Errors that can occur during sheet notation parsing.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NotationError {
    #[error("empty sheet notation")]
    Empty,

    #[error("invalid team character: '{0}'")]
    InvalidTeam(char),

    #[error("invalid stone entry: '{0}'")]
    InvalidEntry(String),

    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),

    #[error("coordinate is not finite: '{0}'")]
    NonFiniteCoordinate(String),
}

/// Parses sheet notation into a list of stones.
pub fn parse_sheet(s: &str) -> Result<Vec<Stone>, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::Empty);
    }
    if s == "-" {
        return Ok(Vec::new());
    }

    s.split(',').map(parse_entry).collect()
}

/// Parses one `<team><x>:<y>` entry.
fn parse_entry(entry: &str) -> Result<Stone, NotationError> {
    let entry = entry.trim();
    let mut chars = entry.chars();
    let team_char = chars
        .next()
        .ok_or_else(|| NotationError::InvalidEntry(entry.to_string()))?;
    let team = Team::from_notation_char(team_char).ok_or(NotationError::InvalidTeam(team_char))?;

    let coords = chars.as_str();
    let (x_str, y_str) = coords
        .split_once(':')
        .ok_or_else(|| NotationError::InvalidEntry(entry.to_string()))?;

    Ok(Stone::new(
        parse_coordinate(x_str)?,
        parse_coordinate(y_str)?,
        team,
    ))
}

fn parse_coordinate(s: &str) -> Result<f64, NotationError> {
    let v: f64 = s
        .parse()
        .map_err(|_| NotationError::InvalidCoordinate(s.to_string()))?;
    if !v.is_finite() {
        return Err(NotationError::NonFiniteCoordinate(s.to_string()));
    }
    Ok(v)
}

/// Encodes stones as sheet notation. Coordinates use the shortest form that
/// parses back to the same value.
pub fn encode_sheet(stones: &[Stone]) -> String {
    if stones.is_empty() {
        return "-".to_string();
    }

    stones
        .iter()
        .map(|s| format!("{}{}:{}", s.team.notation_char(), s.x, s.y))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_sheet() {
        assert_eq!(parse_sheet("-"), Ok(Vec::new()));
        assert_eq!(parse_sheet("  -  "), Ok(Vec::new()));
    }

    #[test]
    fn parse_blank_is_an_error() {
        assert_eq!(parse_sheet(""), Err(NotationError::Empty));
        assert_eq!(parse_sheet("   "), Err(NotationError::Empty));
    }

    #[test]
    fn parse_stones_in_order() {
        let stones = parse_sheet("b300:150,r310.5:140,r-12:400").unwrap();
        assert_eq!(
            stones,
            vec![
                Stone::new(300.0, 150.0, Team::Blue),
                Stone::new(310.5, 140.0, Team::Red),
                Stone::new(-12.0, 400.0, Team::Red),
            ]
        );
    }

    #[test]
    fn parse_rejects_unknown_team() {
        assert_eq!(parse_sheet("y1:2"), Err(NotationError::InvalidTeam('y')));
    }

    #[test]
    fn parse_rejects_missing_separator() {
        assert_eq!(
            parse_sheet("b300"),
            Err(NotationError::InvalidEntry("b300".to_string()))
        );
        assert_eq!(
            parse_sheet("b1:2,"),
            Err(NotationError::InvalidEntry(String::new()))
        );
    }

    #[test]
    fn parse_rejects_bad_coordinates() {
        assert_eq!(
            parse_sheet("b1:x"),
            Err(NotationError::InvalidCoordinate("x".to_string()))
        );
        assert_eq!(
            parse_sheet("r:5"),
            Err(NotationError::InvalidCoordinate(String::new()))
        );
        assert_eq!(
            parse_sheet("rNaN:5"),
            Err(NotationError::NonFiniteCoordinate("NaN".to_string()))
        );
        assert_eq!(
            parse_sheet("binf:5"),
            Err(NotationError::NonFiniteCoordinate("inf".to_string()))
        );
    }

    #[test]
    fn encode_empty_sheet() {
        assert_eq!(encode_sheet(&[]), "-");
    }

    #[test]
    fn encode_then_parse_preserves_stones() {
        let stones = vec![
            Stone::new(300.0, 150.0, Team::Blue),
            Stone::new(0.1 + 0.2, 149.999_999_999_9, Team::Red),
        ];
        let encoded = encode_sheet(&stones);
        assert!(encoded.starts_with("b300:150,r"));
        assert_eq!(parse_sheet(&encoded).unwrap(), stones);
    }
}
