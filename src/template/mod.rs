//! Abstract visual templates.
//!
//! A [`Template`] is the format-independent visual specification (fonts,
//! colors, margins, spacing) that both output generators must honor
//! consistently. Templates are plain data created by product configuration;
//! the engine takes them as arguments rather than reading any global table,
//! so tests and callers can supply synthetic instances freely.

pub mod fonts;

use crate::error::{Error, Result};
use crate::style::Color;

/// Font tokens for the two text roles a template distinguishes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSet {
    pub heading: String,
    pub body: String,
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Template colors as hex strings (e.g. `#1a1a1a`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorSet {
    pub heading: String,
    pub body: String,
    pub accent: String,
}

/// Vertical spacing after blocks, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    pub paragraph: f32,
    pub heading: f32,
}

/// The abstract visual specification shared by both output formats.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "camelCase"))]
pub struct Template {
    pub id: String,
    pub name: String,
    pub fonts: FontSet,
    /// Base body font size in points.
    pub font_size: f32,
    pub margins: Margins,
    pub colors: ColorSet,
    pub spacing: Spacing,
}

impl Template {
    /// Check the template's shape contract.
    ///
    /// A template that fails here is a caller bug (broken configuration), and
    /// the resolvers reject it loudly instead of substituting defaults.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return self.invalid("empty id");
        }
        if self.name.is_empty() {
            return self.invalid("empty name");
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return self.invalid("font size must be a positive number of points");
        }
        for (label, value) in [
            ("margin top", self.margins.top),
            ("margin right", self.margins.right),
            ("margin bottom", self.margins.bottom),
            ("margin left", self.margins.left),
            ("paragraph spacing", self.spacing.paragraph),
            ("heading spacing", self.spacing.heading),
        ] {
            if !value.is_finite() || value < 0.0 {
                return self.invalid(&format!("{label} must be non-negative"));
            }
        }
        for (label, value) in [
            ("heading color", &self.colors.heading),
            ("body color", &self.colors.body),
            ("accent color", &self.colors.accent),
        ] {
            if Color::from_hex(value).is_none() {
                return self.invalid(&format!("{label} is not a hex color: '{value}'"));
            }
        }
        Ok(())
    }

    fn invalid<T>(&self, reason: &str) -> Result<T> {
        Err(Error::InvalidTemplate {
            id: self.id.clone(),
            reason: reason.to_string(),
        })
    }
}

/// Look up a template by id in a caller-supplied list.
pub fn find_template<'a>(templates: &'a [Template], id: &str) -> Result<&'a Template> {
    templates
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| Error::UnknownTemplate(id.to_string()))
}

/// The four templates the product ships.
///
/// Returned as a plain list so callers inject it wherever a template set is
/// needed; nothing in the engine reads it implicitly.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "classic".to_string(),
            name: "Classic".to_string(),
            fonts: FontSet {
                heading: fonts::FONT_HEADING.to_string(),
                body: fonts::FONT_BODY.to_string(),
            },
            font_size: 11.0,
            margins: Margins {
                top: 72.0,
                right: 72.0,
                bottom: 72.0,
                left: 72.0,
            },
            colors: ColorSet {
                heading: "#1a1a1a".to_string(),
                body: "#222222".to_string(),
                accent: "#8b4513".to_string(),
            },
            spacing: Spacing {
                paragraph: 12.0,
                heading: 24.0,
            },
        },
        Template {
            id: "modern".to_string(),
            name: "Modern".to_string(),
            fonts: FontSet {
                heading: fonts::FONT_BODY.to_string(),
                body: fonts::FONT_BODY.to_string(),
            },
            font_size: 10.0,
            margins: Margins {
                top: 54.0,
                right: 54.0,
                bottom: 54.0,
                left: 54.0,
            },
            colors: ColorSet {
                heading: "#111111".to_string(),
                body: "#333333".to_string(),
                accent: "#0066cc".to_string(),
            },
            spacing: Spacing {
                paragraph: 16.0,
                heading: 20.0,
            },
        },
        Template {
            id: "elegant".to_string(),
            name: "Elegant".to_string(),
            fonts: FontSet {
                heading: "Georgia, serif".to_string(),
                body: fonts::FONT_BODY.to_string(),
            },
            font_size: 12.0,
            margins: Margins {
                top: 81.0,
                right: 81.0,
                bottom: 81.0,
                left: 81.0,
            },
            colors: ColorSet {
                heading: "#2b2b2b".to_string(),
                body: "#3c3c3c".to_string(),
                accent: "#7b2d26".to_string(),
            },
            spacing: Spacing {
                paragraph: 14.0,
                heading: 28.0,
            },
        },
        Template {
            id: "compact".to_string(),
            name: "Compact".to_string(),
            fonts: FontSet {
                heading: fonts::FONT_HEADING.to_string(),
                body: fonts::FONT_BODY.to_string(),
            },
            font_size: 9.0,
            margins: Margins {
                top: 36.0,
                right: 36.0,
                bottom: 36.0,
                left: 36.0,
            },
            colors: ColorSet {
                heading: "#000000".to_string(),
                body: "#1f1f1f".to_string(),
                accent: "#555555".to_string(),
            },
            spacing: Spacing {
                paragraph: 8.0,
                heading: 14.0,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid() {
        let templates = builtin_templates();
        assert_eq!(templates.len(), 4);
        for template in &templates {
            template.validate().expect("builtin template must validate");
        }
    }

    #[test]
    fn test_find_template() {
        let templates = builtin_templates();
        assert_eq!(find_template(&templates, "modern").unwrap().name, "Modern");
        assert!(matches!(
            find_template(&templates, "brutalist"),
            Err(Error::UnknownTemplate(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let mut template = builtin_templates().remove(0);
        template.colors.accent = "maroon".to_string();
        assert!(matches!(
            template.validate(),
            Err(Error::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nonpositive_font_size() {
        let mut template = builtin_templates().remove(0);
        template.font_size = 0.0;
        assert!(template.validate().is_err());
        template.font_size = -3.0;
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_margin() {
        let mut template = builtin_templates().remove(0);
        template.margins.left = -1.0;
        assert!(template.validate().is_err());
    }
}
