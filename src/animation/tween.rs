use std::fmt;

use crate::animation::ease::Ease;

/// DOM id of the preview box every generated script animates.
pub const TARGET_ID: &str = "animationTarget";

/// What a tween animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// The preview box, addressed by its `#animationTarget` selector (quoted in script text).
    Selector,
    /// A caller-provided `element` binding (catalogue templates use this form).
    Element,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector => write!(f, "\"#{TARGET_ID}\""),
            Self::Element => f.write_str("element"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prop {
    Opacity,
    X,
    Y,
    Rotation,
    RotationY,
    Scale,
}

impl Prop {
    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::X => "x",
            Self::Y => "y",
            Self::Rotation => "rotation",
            Self::RotationY => "rotationY",
            Self::Scale => "scale",
        }
    }

    /// Value of an untouched element; the implicit start of a `to` tween.
    pub fn rest_value(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::X | Self::Y | Self::Rotation | Self::RotationY => 0.0,
        }
    }
}

/// A single tween, the unit every generated or catalogued script is made of.
///
/// `from == None` renders as `gsap.to(...)`, otherwise as `gsap.fromTo(...)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub target: Target,
    pub from: Option<Vec<(Prop, f64)>>,
    pub to: Vec<(Prop, f64)>,
    pub duration: f64, // seconds
    pub ease: Ease,
    pub repeat: u32,
    pub yoyo: bool,
}

impl Tween {
    pub fn to(target: Target, to: Vec<(Prop, f64)>, duration: f64, ease: Ease) -> Self {
        Self {
            target,
            from: None,
            to,
            duration,
            ease,
            repeat: 0,
            yoyo: false,
        }
    }

    pub fn from_to(
        target: Target,
        from: Vec<(Prop, f64)>,
        to: Vec<(Prop, f64)>,
        duration: f64,
        ease: Ease,
    ) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, to, duration, ease)
        }
    }

    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Play time including repeats.
    pub fn total_duration(&self) -> f64 {
        self.duration.max(0.0) * f64::from(self.repeat + 1)
    }

    fn start_value(&self, prop: Prop) -> f64 {
        self.from
            .as_ref()
            .and_then(|from| from.iter().find(|(p, _)| *p == prop))
            .map_or_else(|| prop.rest_value(), |(_, v)| *v)
    }

    /// Values of every animated property at `t` seconds.
    ///
    /// `t` is clamped to `[0, total_duration]`; odd iterations of a yoyo tween play backwards.
    pub fn sample(&self, t: f64) -> Vec<(Prop, f64)> {
        let progress = self.progress_at(t);
        self.to
            .iter()
            .map(|&(prop, end)| {
                let start = self.start_value(prop);
                (prop, start + (end - start) * self.ease.apply(progress))
            })
            .collect()
    }

    fn progress_at(&self, t: f64) -> f64 {
        let d = self.duration;
        if d <= 0.0 {
            return 1.0;
        }
        let iterations = self.repeat + 1;
        let t = t.clamp(0.0, self.total_duration());

        let mut iter = (t / d).floor() as u32;
        let mut local = t - f64::from(iter) * d;
        if iter >= iterations {
            iter = iterations - 1;
            local = d;
        }

        let p = local / d;
        if self.yoyo && iter % 2 == 1 { 1.0 - p } else { p }
    }

    fn write_options(&self, f: &mut fmt::Formatter<'_>, sep: &str) -> fmt::Result {
        write!(f, "duration: {}", self.duration)?;
        if self.repeat > 0 {
            write!(f, "{sep}repeat: {}", self.repeat)?;
        }
        if self.yoyo {
            write!(f, "{sep}yoyo: true")?;
        }
        write!(f, "{sep}ease: \"{}\"", self.ease)
    }
}

fn write_props(f: &mut fmt::Formatter<'_>, props: &[(Prop, f64)], sep: &str) -> fmt::Result {
    for (prop, value) in props {
        write!(f, "{}: {value}{sep}", prop.name())?;
    }
    Ok(())
}

impl fmt::Display for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            None => {
                writeln!(f, "gsap.to({}, {{", self.target)?;
                f.write_str("  ")?;
                write_props(f, &self.to, ",\n  ")?;
                self.write_options(f, ",\n  ")?;
                f.write_str("\n});")
            }
            Some(from) => {
                writeln!(f, "gsap.fromTo({},", self.target)?;
                f.write_str("  { ")?;
                let last = from.len().saturating_sub(1);
                for (i, (prop, value)) in from.iter().enumerate() {
                    write!(f, "{}: {value}", prop.name())?;
                    if i != last {
                        f.write_str(", ")?;
                    }
                }
                f.write_str(" },\n  { ")?;
                write_props(f, &self.to, ", ")?;
                self.write_options(f, ", ")?;
                f.write_str(" }\n);")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
