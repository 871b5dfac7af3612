//! GSAP-style easing curves.
//!
//! Names follow the `family.direction` convention used in the site's
//! animation records (`"power2.out"`, `"sine.inOut"`, `"none"`). A bare
//! family name means its `out` variant.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const BACK_OVERSHOOT: f64 = 1.70158;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ease {name:?}")]
pub struct EaseParseError {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    #[default]
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
    Power4In,
    Power4Out,
    Power4InOut,
    SineIn,
    SineOut,
    SineInOut,
    BackOut,
}

#[derive(Clone, Copy)]
enum Direction {
    In,
    Out,
    InOut,
}

impl Ease {
    /// Map linear progress to eased progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::Power1In => power(t, 2, Direction::In),
            Ease::Power1Out => power(t, 2, Direction::Out),
            Ease::Power1InOut => power(t, 2, Direction::InOut),
            Ease::Power2In => power(t, 3, Direction::In),
            Ease::Power2Out => power(t, 3, Direction::Out),
            Ease::Power2InOut => power(t, 3, Direction::InOut),
            Ease::Power3In => power(t, 4, Direction::In),
            Ease::Power3Out => power(t, 4, Direction::Out),
            Ease::Power3InOut => power(t, 4, Direction::InOut),
            Ease::Power4In => power(t, 5, Direction::In),
            Ease::Power4Out => power(t, 5, Direction::Out),
            Ease::Power4InOut => power(t, 5, Direction::InOut),
            Ease::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Ease::SineOut => (t * PI / 2.0).sin(),
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
            }
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "none",
            Ease::Power1In => "power1.in",
            Ease::Power1Out => "power1.out",
            Ease::Power1InOut => "power1.inOut",
            Ease::Power2In => "power2.in",
            Ease::Power2Out => "power2.out",
            Ease::Power2InOut => "power2.inOut",
            Ease::Power3In => "power3.in",
            Ease::Power3Out => "power3.out",
            Ease::Power3InOut => "power3.inOut",
            Ease::Power4In => "power4.in",
            Ease::Power4Out => "power4.out",
            Ease::Power4InOut => "power4.inOut",
            Ease::SineIn => "sine.in",
            Ease::SineOut => "sine.out",
            Ease::SineInOut => "sine.inOut",
            Ease::BackOut => "back.out",
        }
    }
}

fn power(t: f64, exponent: i32, direction: Direction) -> f64 {
    match direction {
        Direction::In => t.powi(exponent),
        Direction::Out => 1.0 - (1.0 - t).powi(exponent),
        Direction::InOut => {
            if t < 0.5 {
                (2.0 * t).powi(exponent) / 2.0
            } else {
                1.0 - (2.0 * (1.0 - t)).powi(exponent) / 2.0
            }
        }
    }
}

impl FromStr for Ease {
    type Err = EaseParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.trim();
        let (family, direction) = name.split_once('.').unwrap_or((name, "out"));
        let ease = match (family, direction) {
            ("none" | "linear" | "power0", _) => Ease::Linear,
            ("power1", "in") => Ease::Power1In,
            ("power1", "out") => Ease::Power1Out,
            ("power1", "inOut") => Ease::Power1InOut,
            ("power2", "in") => Ease::Power2In,
            ("power2", "out") => Ease::Power2Out,
            ("power2", "inOut") => Ease::Power2InOut,
            ("power3", "in") => Ease::Power3In,
            ("power3", "out") => Ease::Power3Out,
            ("power3", "inOut") => Ease::Power3InOut,
            ("power4", "in") => Ease::Power4In,
            ("power4", "out") => Ease::Power4Out,
            ("power4", "inOut") => Ease::Power4InOut,
            ("sine", "in") => Ease::SineIn,
            ("sine", "out") => Ease::SineOut,
            ("sine", "inOut") => Ease::SineInOut,
            ("back", "out") => Ease::BackOut,
            _ => return Err(EaseParseError { name: name.to_owned() }),
        };
        Ok(ease)
    }
}

impl TryFrom<String> for Ease {
    type Error = EaseParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.name().to_owned()
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
