use std::fmt;

/// Overshoot used by the runtime's default `back.out` curve.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.7;

/// Easing curves understood by the animation runtime.
///
/// `name()` is the runtime spelling (what ends up in script text); `apply()` evaluates the curve
/// so previews can be sampled without the runtime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    None,
    Power1InOut,
    Power2In,
    Power2Out,
    Power3InOut,
    BounceOut,
    BackOut(f64),
}

impl Ease {
    /// Runtime name, e.g. `power2.out` or `back.out(1.7)`.
    pub fn name(self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Power1InOut => "power1.inOut".to_string(),
            Self::Power2In => "power2.in".to_string(),
            Self::Power2Out => "power2.out".to_string(),
            Self::Power3InOut => "power3.inOut".to_string(),
            Self::BounceOut => "bounce.out".to_string(),
            Self::BackOut(s) => format!("back.out({s})"),
        }
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::None => t,
            // power1 is quadratic
            Self::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            // power2 is cubic
            Self::Power2In => t * t * t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            // power3 is quartic
            Self::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::BounceOut => bounce_out(t),
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t >= 1.0 {
        1.0
    } else if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
