//! JSON request and response bodies.
//!
//! Mirrors the front-end's `recommend-shot` payloads. A request is either
//! `{"stones": [...], "team": "blue"}` (team optional, default blue) or a
//! bare array of stones. Each stone is `{"x": .., "y": .., "color": ..}`.

use serde::{Deserialize, Serialize};

use crate::shot::Recommendation;
use crate::sheet::{Stone, Team};

/// Errors raised while decoding a JSON request.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("stone {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// A stone as sent by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireStone {
    pub x: f64,
    pub y: f64,
    pub color: Team,
}

impl From<WireStone> for Stone {
    fn from(s: WireStone) -> Self {
        Stone::new(s.x, s.y, s.color)
    }
}

#[derive(Debug, Deserialize)]
struct RequestBody {
    stones: Vec<WireStone>,
    #[serde(default)]
    team: Option<Team>,
}

/// A decoded shot request.
#[derive(Debug, Clone, PartialEq)]
pub struct ShotRequest {
    pub stones: Vec<Stone>,
    pub shooter: Team,
}

/// House counts reported alongside the shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireAnalysis {
    pub blue_stones_in_house: usize,
    pub red_stones_in_house: usize,
}

/// Response body for a shot request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotResponse {
    pub recommended_shot: String,
    pub x: f64,
    pub y: f64,
    pub analysis: WireAnalysis,
}

impl From<&Recommendation> for ShotResponse {
    fn from(rec: &Recommendation) -> Self {
        ShotResponse {
            recommended_shot: rec.shot.label().to_string(),
            x: rec.target.x,
            y: rec.target.y,
            analysis: WireAnalysis {
                blue_stones_in_house: rec.blue_in_house,
                red_stones_in_house: rec.red_in_house,
            },
        }
    }
}

/// Decodes a JSON shot request.
pub fn parse_request(json: &str) -> Result<ShotRequest, WireError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let (stones, team) = if value.is_array() {
        (serde_json::from_value::<Vec<WireStone>>(value)?, None)
    } else {
        let body: RequestBody = serde_json::from_value(value)?;
        (body.stones, body.team)
    };

    if let Some(index) = stones
        .iter()
        .position(|s| !s.x.is_finite() || !s.y.is_finite())
    {
        return Err(WireError::NonFiniteCoordinate { index });
    }

    Ok(ShotRequest {
        stones: stones.into_iter().map(Stone::from).collect(),
        shooter: team.unwrap_or(Team::Blue),
    })
}

/// Encodes a recommendation as a single-line JSON response.
pub fn format_response(rec: &Recommendation) -> Result<String, WireError> {
    Ok(serde_json::to_string(&ShotResponse::from(rec))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Point;
    use crate::shot::{ShotType, SpotSearch};

    #[test]
    fn parse_wrapped_request() {
        let req = parse_request(
            r#"{"stones": [{"x": 300, "y": 150.5, "color": "red"}, {"x": 1, "y": 2, "color": "blue"}]}"#,
        )
        .unwrap();
        assert_eq!(req.shooter, Team::Blue);
        assert_eq!(
            req.stones,
            vec![
                Stone::new(300.0, 150.5, Team::Red),
                Stone::new(1.0, 2.0, Team::Blue),
            ]
        );
    }

    #[test]
    fn parse_wrapped_request_with_team() {
        let req = parse_request(r#"{"stones": [], "team": "red"}"#).unwrap();
        assert_eq!(req.shooter, Team::Red);
        assert!(req.stones.is_empty());
    }

    #[test]
    fn parse_bare_list() {
        let req = parse_request(r#"[{"x": 10, "y": 20, "color": "blue"}]"#).unwrap();
        assert_eq!(req.stones, vec![Stone::new(10.0, 20.0, Team::Blue)]);
        assert_eq!(req.shooter, Team::Blue);
    }

    #[test]
    fn rejects_unknown_color() {
        let err = parse_request(r#"[{"x": 10, "y": 20, "color": "yellow"}]"#).unwrap_err();
        assert!(matches!(err, WireError::Json(_)));
        assert!(err.to_string().contains("unknown variant `yellow`"), "{}", err);
    }

    #[test]
    fn rejects_missing_field() {
        let err = parse_request(r#"{"stones": [{"x": 10, "color": "red"}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `y`"), "{}", err);
        assert!(parse_request("not json").is_err());
    }

    #[test]
    fn errors_name_the_bad_field_in_either_shape() {
        let wrapped = parse_request(r#"{"stones": [{"x": 1, "y": 2, "color": "green"}]}"#);
        let bare = parse_request(r#"[{"x": 1, "y": "two", "color": "red"}]"#);
        let no_stones = parse_request(r#"{"team": "red"}"#);
        let bad_team = parse_request(r#"{"stones": [], "team": "purple"}"#);
        assert!(wrapped.unwrap_err().to_string().contains("`green`"));
        assert!(bare.unwrap_err().to_string().contains("invalid type: string \"two\""));
        assert!(no_stones.unwrap_err().to_string().contains("missing field `stones`"));
        assert!(bad_team.unwrap_err().to_string().contains("`purple`"));
    }

    #[test]
    fn rejects_scalar_body() {
        assert!(matches!(parse_request("42"), Err(WireError::Json(_))));
    }

    #[test]
    fn response_uses_front_end_field_names() {
        let rec = Recommendation {
            shot: ShotType::DrawToButton,
            target: Point::new(300.0, 150.0),
            blue_in_house: 2,
            red_in_house: 0,
            search: SpotSearch::Found,
        };
        let json = format_response(&rec).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["recommended_shot"], "Draw to Button");
        assert_eq!(value["x"], 300.0);
        assert_eq!(value["y"], 150.0);
        assert_eq!(value["analysis"]["blue_stones_in_house"], 2);
        assert_eq!(value["analysis"]["red_stones_in_house"], 0);
    }
}
