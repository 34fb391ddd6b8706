//! Prompt to animation snippet resolution.
//!
//! Matching is plain substring containment over the lower-cased prompt, so a keyword that
//! happens to sit inside a longer word still matches (`"upright"` hits the `right` group).
//! Groups are tested in declaration order and the first hit wins.

use crate::animation::{
    ease::{DEFAULT_BACK_OVERSHOOT, Ease},
    tween::{Prop, Target, Tween},
};

/// The canned effect a prompt resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    FadeIn,
    FadeOut,
    Rotate { degrees: u16 },
    Bounce,
    SlideFromLeft,
    SlideFromRight,
    SlideFromTop,
    SlideFromBottom,
    ScaleUp,
    ScaleDown,
    /// Fallback when no keyword matches: fade in while rising.
    RiseIn,
}

/// Keyword groups in precedence order. Each pair is (source-language keyword, English keyword).
const GROUPS: [(&str, &str); 10] = [
    ("淡入", "fade in"),
    ("淡出", "fade out"),
    ("旋转", "rotate"),
    ("弹跳", "bounce"),
    ("左", "left"),
    ("右", "right"),
    ("上", "top"),
    ("下", "bottom"),
    ("放大", "scale up"),
    ("缩小", "scale down"),
];

pub fn classify(prompt: &str) -> Effect {
    let lower = prompt.to_lowercase();
    let hit = GROUPS
        .iter()
        .position(|(native, english)| lower.contains(native) || lower.contains(english));

    match hit {
        Some(0) => Effect::FadeIn,
        Some(1) => Effect::FadeOut,
        Some(2) => Effect::Rotate {
            degrees: if lower.contains("360") { 360 } else { 180 },
        },
        Some(3) => Effect::Bounce,
        Some(4) => Effect::SlideFromLeft,
        Some(5) => Effect::SlideFromRight,
        Some(6) => Effect::SlideFromTop,
        Some(7) => Effect::SlideFromBottom,
        Some(8) => Effect::ScaleUp,
        Some(9) => Effect::ScaleDown,
        _ => Effect::RiseIn,
    }
}

fn slide_in(axis: Prop, offset: f64) -> Tween {
    Tween::from_to(
        Target::Selector,
        vec![(axis, offset), (Prop::Opacity, 0.0)],
        vec![(axis, 0.0), (Prop::Opacity, 1.0)],
        1.2,
        Ease::Power2Out,
    )
}

impl Effect {
    pub fn tween(self) -> Tween {
        let t = Target::Selector;
        match self {
            Self::FadeIn => Tween::from_to(
                t,
                vec![(Prop::Opacity, 0.0)],
                vec![(Prop::Opacity, 1.0)],
                1.5,
                Ease::Power2Out,
            ),
            Self::FadeOut => Tween::to(t, vec![(Prop::Opacity, 0.0)], 1.5, Ease::Power2In),
            Self::Rotate { degrees } => Tween::to(
                t,
                vec![(Prop::Rotation, f64::from(degrees))],
                2.0,
                Ease::Power1InOut,
            ),
            Self::Bounce => Tween::from_to(
                t,
                vec![(Prop::Y, -50.0)],
                vec![(Prop::Y, 0.0)],
                1.5,
                Ease::BounceOut,
            ),
            Self::SlideFromLeft => slide_in(Prop::X, -100.0),
            Self::SlideFromRight => slide_in(Prop::X, 100.0),
            Self::SlideFromTop => slide_in(Prop::Y, -100.0),
            Self::SlideFromBottom => slide_in(Prop::Y, 100.0),
            Self::ScaleUp => Tween::from_to(
                t,
                vec![(Prop::Scale, 0.0)],
                vec![(Prop::Scale, 1.0)],
                1.2,
                Ease::BackOut(DEFAULT_BACK_OVERSHOOT),
            ),
            Self::ScaleDown => Tween::from_to(
                t,
                vec![(Prop::Scale, 1.5)],
                vec![(Prop::Scale, 1.0)],
                1.2,
                Ease::Power2Out,
            ),
            Self::RiseIn => Tween::from_to(
                t,
                vec![(Prop::Opacity, 0.0), (Prop::Y, 20.0)],
                vec![(Prop::Opacity, 1.0), (Prop::Y, 0.0)],
                1.0,
                Ease::Power2Out,
            ),
        }
    }
}

/// Resolve free text into script text. Total: every input yields a non-empty script.
pub fn resolve(prompt: &str) -> String {
    classify(prompt).tween().to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/resolve/snippet.rs"]
mod tests;
