//! Cubic-bezier easing curves
//!
//! Curves come either from the design-token table or from a literal
//! `cubic-bezier(x1, y1, x2, y2)` string. Literals are parsed with nom; the
//! x control points must lie in `[0, 1]` as CSS requires.

use std::fmt;
use std::str::FromStr;

use glide_core::ConfigError;
use nom::{
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::all_consuming,
    error::ParseError as NomParseError,
    number::complete::double,
    sequence::delimited,
    Finish, IResult,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::css::format_number;

/// A CSS cubic-bezier timing function
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    /// Material-style standard curve
    pub const STANDARD: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);
    /// Strong ease-out for entering content
    pub const EMPHASIZED: CubicBezier = CubicBezier::new(0.2, 0.0, 0.0, 1.0);
    pub const DECELERATE: CubicBezier = CubicBezier::new(0.0, 0.0, 0.2, 1.0);
    pub const ACCELERATE: CubicBezier = CubicBezier::new(0.4, 0.0, 1.0, 1.0);
    /// Soft overshoot-free settle used by glass surfaces
    pub const GLASS: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Look up a design-token name
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "standard" => Some(Self::STANDARD),
            "emphasized" => Some(Self::EMPHASIZED),
            "decelerate" => Some(Self::DECELERATE),
            "accelerate" => Some(Self::ACCELERATE),
            "glass" => Some(Self::GLASS),
            _ => None,
        }
    }

    /// Parse a `cubic-bezier(...)` literal
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let parsed = all_consuming(cubic_bezier::<nom::error::Error<&str>>)(input)
            .finish()
            .map(|(_, curve)| curve)
            .map_err(|_| ConfigError::InvalidEasing(input.to_string()))?;

        if parsed.is_valid() {
            Ok(parsed)
        } else {
            Err(ConfigError::InvalidEasing(input.to_string()))
        }
    }

    /// Token lookup first, then literal parsing. Unrecognized input yields
    /// `None` so the caller's default easing applies.
    pub fn resolve(input: &str) -> Option<Self> {
        if let Some(curve) = Self::from_token(input) {
            return Some(curve);
        }
        match Self::parse(input) {
            Ok(curve) => Some(curve),
            Err(err) => {
                debug!(%err, "easing not recognized");
                None
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|v| v.is_finite())
            && (0.0..=1.0).contains(&self.x1)
            && (0.0..=1.0).contains(&self.x2)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            format_number(self.x1),
            format_number(self.y1),
            format_number(self.x2),
            format_number(self.y2)
        )
    }
}

impl FromStr for CubicBezier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).map_or_else(|| Self::parse(s), Ok)
    }
}

fn ws<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, &'a str, E> {
    multispace0(input)
}

fn number<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f64, E> {
    delimited(ws, double, ws)(input)
}

/// Parse cubic-bezier(x1, y1, x2, y2)
fn cubic_bezier<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, CubicBezier, E> {
    let (input, _) = ws(input)?;
    let (input, _) = tag_no_case("cubic-bezier")(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('(')(input)?;
    let (input, x1) = number(input)?;
    let (input, _) = char(',')(input)?;
    let (input, y1) = number(input)?;
    let (input, _) = char(',')(input)?;
    let (input, x2) = number(input)?;
    let (input, _) = char(',')(input)?;
    let (input, y2) = number(input)?;
    let (input, _) = char(')')(input)?;
    let (input, _) = ws(input)?;

    Ok((input, CubicBezier::new(x1, y1, x2, y2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        let curve = CubicBezier::parse("cubic-bezier(0.34, 1.56, 0.64, 1)").unwrap();
        assert_eq!(curve, CubicBezier::new(0.34, 1.56, 0.64, 1.0));
    }

    #[test]
    fn test_parse_is_whitespace_and_case_tolerant() {
        let curve = CubicBezier::parse("  Cubic-Bezier( .2 ,0,0 , 1 )  ").unwrap();
        assert_eq!(curve, CubicBezier::EMPHASIZED);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(CubicBezier::parse("cubic-bezier(0.1, 0.2, 0.3)").is_err());
        assert!(CubicBezier::parse("cubic-bezier(0.1, 0.2, 0.3, 1) trailing").is_err());
        assert!(CubicBezier::parse("ease-in").is_err());
        // x outside [0, 1]
        assert!(CubicBezier::parse("cubic-bezier(1.5, 0, 0.5, 1)").is_err());
    }

    #[test]
    fn test_resolve_prefers_tokens() {
        assert_eq!(CubicBezier::resolve("glass"), Some(CubicBezier::GLASS));
        assert_eq!(
            CubicBezier::resolve("cubic-bezier(0, 0, 1, 1)"),
            Some(CubicBezier::new(0.0, 0.0, 1.0, 1.0))
        );
        assert_eq!(CubicBezier::resolve("bogus"), None);
    }

    #[test]
    fn test_css_round_trip() {
        let css = CubicBezier::GLASS.to_css();
        assert_eq!(css, "cubic-bezier(0.22, 1, 0.36, 1)");
        assert_eq!(css.parse::<CubicBezier>().unwrap(), CubicBezier::GLASS);
    }
}
