//! Paginated style resolution.
//!
//! [`to_paginated_styles`] is the template resolver for the paginated output:
//! a pure, deterministic transform from a [`Template`] into the concrete
//! [`PageStyles`] the element generator and the downstream page writer
//! consume. Two calls with equal templates yield deep-equal style sheets.

use crate::error::Result;
use crate::template::Template;
use crate::template::fonts::{OutputFormat, resolve_font_family};

/// Opaque RGB color parsed from a template hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let r = chars.next()?.to_digit(16)? as u8;
                let g = chars.next()?.to_digit(16)? as u8;
                let b = chars.next()?.to_digit(16)? as u8;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
                let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
                let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Resolved style for one kind of text block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct TextStyle {
    pub font_family: String,
    /// Point size.
    pub font_size: f32,
    pub color: Color,
    /// Vertical gap after the block, in points.
    pub margin_bottom: f32,
}

/// Page-level geometry and defaults.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct PageBox {
    /// Base body font size in points.
    pub font_size: f32,
    pub color: Color,
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
}

/// The concrete style sheet for paginated output.
///
/// Derived deterministically from one [`Template`]; carries everything the
/// element generator needs so no template lookup happens during content
/// conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct PageStyles {
    pub page: PageBox,
    pub chapter_title: TextStyle,
    pub paragraph: TextStyle,
    pub blockquote: TextStyle,
    /// Left indent for list items, in points.
    pub list_indent: f32,
}

impl PageStyles {
    /// Style for a heading of the given level, on the chapter-title family
    /// and color with the shared heading size scale.
    pub fn heading(&self, level: u8) -> TextStyle {
        TextStyle {
            font_size: heading_font_size(self.page.font_size, level),
            ..self.chapter_title.clone()
        }
    }
}

/// Chapter titles are always 6pt larger than body text, for every template.
pub fn chapter_title_font_size(template: &Template) -> f32 {
    template.font_size + 6.0
}

/// Heading size scale shared by the paginated and reflow generators.
pub fn heading_font_size(base: f32, level: u8) -> f32 {
    match level {
        1 => base + 6.0,
        2 => base + 4.0,
        _ => base + 2.0,
    }
}

/// Resolve a template into the paginated style sheet.
///
/// Margins map 1:1 in points to page padding. Fails only when the template
/// violates its shape contract.
pub fn to_paginated_styles(template: &Template) -> Result<PageStyles> {
    template.validate()?;

    let body_color = Color::from_hex(&template.colors.body).unwrap_or(Color::BLACK);
    let heading_color = Color::from_hex(&template.colors.heading).unwrap_or(Color::BLACK);
    let accent_color = Color::from_hex(&template.colors.accent).unwrap_or(Color::BLACK);

    let body_family = resolve_font_family(&template.fonts.body, OutputFormat::Paginated);
    let heading_family = resolve_font_family(&template.fonts.heading, OutputFormat::Paginated);

    Ok(PageStyles {
        page: PageBox {
            font_size: template.font_size,
            color: body_color,
            padding_top: template.margins.top,
            padding_right: template.margins.right,
            padding_bottom: template.margins.bottom,
            padding_left: template.margins.left,
        },
        chapter_title: TextStyle {
            font_family: heading_family.to_string(),
            font_size: chapter_title_font_size(template),
            color: heading_color,
            margin_bottom: template.spacing.heading,
        },
        paragraph: TextStyle {
            font_family: body_family.to_string(),
            font_size: template.font_size,
            color: body_color,
            margin_bottom: template.spacing.paragraph,
        },
        blockquote: TextStyle {
            font_family: body_family.to_string(),
            font_size: template.font_size,
            color: accent_color,
            margin_bottom: template.spacing.paragraph,
        },
        list_indent: template.font_size * 1.5,
    })
}
