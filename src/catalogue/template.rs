use std::{collections::HashSet, sync::LazyLock};

use crate::{
    animation::{
        ease::{DEFAULT_BACK_OVERSHOOT, Ease},
        tween::{Prop, Target, Tween},
    },
    foundation::error::{AnimatorError, AnimatorResult},
};

/// A named, ready-made animation script.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
}

/// Read-only registry of templates, kept in definition order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalogue {
    templates: Vec<AnimationTemplate>,
}

static BUILTIN: LazyLock<Catalogue> = LazyLock::new(Catalogue::build_builtin);

impl Catalogue {
    /// Build a catalogue, rejecting blank ids, duplicate ids and empty scripts.
    pub fn new(templates: Vec<AnimationTemplate>) -> AnimatorResult<Self> {
        validate(&templates)?;
        Ok(Self { templates })
    }

    /// The templates shipped with the editor.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Load a catalogue from a JSON array of templates.
    pub fn from_reader(r: impl std::io::Read) -> AnimatorResult<Self> {
        let templates: Vec<AnimationTemplate> = serde_json::from_reader(r)?;
        Self::new(templates)
    }

    pub fn from_json_str(s: &str) -> AnimatorResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn all(&self) -> &[AnimationTemplate] {
        &self.templates
    }

    pub fn by_id(&self, id: &str) -> Option<&AnimationTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.templates
            .iter()
            .map(|t| t.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&AnimationTemplate> {
        self.templates
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn build_builtin() -> Self {
        let el = Target::Element;
        let entries = [
            (
                "fade-in",
                "Fade in",
                "Element goes from transparent to opaque",
                "Basic",
                Tween::to(el, vec![(Prop::Opacity, 1.0)], 1.0, Ease::Power2Out),
            ),
            (
                "fade-out",
                "Fade out",
                "Element goes from opaque to transparent",
                "Basic",
                Tween::to(el, vec![(Prop::Opacity, 0.0)], 1.0, Ease::Power2In),
            ),
            (
                "slide-in-left",
                "Slide in from left",
                "Element slides into view from the left",
                "Motion",
                Tween::from_to(
                    el,
                    vec![(Prop::X, -100.0), (Prop::Opacity, 0.0)],
                    vec![(Prop::X, 0.0), (Prop::Opacity, 1.0)],
                    1.0,
                    Ease::Power2Out,
                ),
            ),
            (
                "bounce",
                "Bounce",
                "Element drops and bounces",
                "Effects",
                Tween::from_to(
                    el,
                    vec![(Prop::Y, -50.0)],
                    vec![(Prop::Y, 0.0)],
                    1.0,
                    Ease::BounceOut,
                ),
            ),
            (
                "rotate-360",
                "Rotate 360",
                "Element spins one full turn",
                "Rotation",
                Tween::to(el, vec![(Prop::Rotation, 360.0)], 2.0, Ease::Power1InOut),
            ),
            (
                "scale-up",
                "Scale up",
                "Element grows from nothing to full size",
                "Scale",
                Tween::from_to(
                    el,
                    vec![(Prop::Scale, 0.0)],
                    vec![(Prop::Scale, 1.0)],
                    1.0,
                    Ease::BackOut(DEFAULT_BACK_OVERSHOOT),
                ),
            ),
            (
                "shake",
                "Shake",
                "Element shakes left and right",
                "Effects",
                Tween::to(el, vec![(Prop::X, 10.0)], 0.1, Ease::None)
                    .repeat(5)
                    .yoyo(true),
            ),
            (
                "flip",
                "Flip",
                "Element flips around its vertical axis in 3D",
                "3D",
                Tween::to(el, vec![(Prop::RotationY, 180.0)], 1.5, Ease::Power3InOut),
            ),
        ];

        let templates = entries
            .into_iter()
            .map(|(id, name, description, category, tween)| AnimationTemplate {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                code: tween.to_string(),
                preview_image_url: Some(format!("/templates/{id}.png")),
            })
            .collect();
        Self { templates }
    }
}

fn validate(templates: &[AnimationTemplate]) -> AnimatorResult<()> {
    let mut seen = HashSet::new();
    for t in templates {
        if t.id.trim().is_empty() {
            return Err(AnimatorError::validation("template id must be non-empty"));
        }
        if !seen.insert(t.id.as_str()) {
            return Err(AnimatorError::validation(format!(
                "duplicate template id '{}'",
                t.id
            )));
        }
        if t.code.trim().is_empty() {
            return Err(AnimatorError::validation(format!(
                "template '{}' has no code",
                t.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/catalogue/template.rs"]
mod tests;
