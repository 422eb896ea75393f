//! Reflow stylesheet generation.
//!
//! Reflowable output keeps the original chapter markup and attaches a
//! stylesheet, so this generator never touches content: it renders one CSS
//! text block per template, selecting by semantic element. The declarations
//! are a compatibility contract, not a style suggestion — downstream
//! consumers grep for exact substrings (`body {`, `font-size: ..pt`,
//! `margin-bottom: ..px`, hex colors verbatim), so font sizes stay in points
//! (author intent survives device substitution) while vertical spacing maps
//! to pixel margins.

use std::fmt::Write;

use crate::error::Result;
use crate::style::heading_font_size;
use crate::template::Template;
use crate::template::fonts::{OutputFormat, resolve_font_family};

/// Render the reflow CSS for a template.
///
/// Pure and deterministic; fails only on a template that violates its shape
/// contract.
pub fn to_reflow_css(template: &Template) -> Result<String> {
    template.validate()?;

    let body_font = resolve_font_family(&template.fonts.body, OutputFormat::Reflow);
    let heading_font = resolve_font_family(&template.fonts.heading, OutputFormat::Reflow);
    let base = template.font_size;
    let margins = &template.margins;
    let colors = &template.colors;
    let spacing = &template.spacing;

    let mut css = String::new();

    writeln!(css, "body {{").unwrap();
    writeln!(css, "  font-family: {body_font};").unwrap();
    writeln!(css, "  font-size: {base}pt;").unwrap();
    writeln!(css, "  color: {};", colors.body).unwrap();
    writeln!(css, "  line-height: 1.6;").unwrap();
    writeln!(
        css,
        "  margin: {}pt {}pt {}pt {}pt;",
        margins.top, margins.right, margins.bottom, margins.left
    )
    .unwrap();
    writeln!(css, "}}").unwrap();

    for level in 1..=3u8 {
        writeln!(css).unwrap();
        writeln!(css, "h{level} {{").unwrap();
        writeln!(css, "  font-family: {heading_font};").unwrap();
        writeln!(css, "  font-size: {}pt;", heading_font_size(base, level)).unwrap();
        writeln!(css, "  color: {};", colors.heading).unwrap();
        writeln!(css, "  margin-top: 0;").unwrap();
        writeln!(css, "  margin-bottom: {}px;", spacing.heading).unwrap();
        writeln!(css, "}}").unwrap();
    }

    writeln!(css).unwrap();
    writeln!(css, "p {{").unwrap();
    writeln!(css, "  margin-top: 0;").unwrap();
    writeln!(css, "  margin-bottom: {}px;", spacing.paragraph).unwrap();
    writeln!(css, "}}").unwrap();

    writeln!(css).unwrap();
    writeln!(css, "blockquote {{").unwrap();
    writeln!(css, "  color: {};", colors.accent).unwrap();
    writeln!(css, "  border-left: 3px solid {};", colors.accent).unwrap();
    writeln!(css, "  font-style: italic;").unwrap();
    writeln!(css, "  margin: 0 0 {}px 1.5em;", spacing.paragraph).unwrap();
    writeln!(css, "  padding-left: 1em;").unwrap();
    writeln!(css, "}}").unwrap();

    writeln!(css).unwrap();
    writeln!(css, "ul, ol {{").unwrap();
    writeln!(css, "  margin-top: 0;").unwrap();
    writeln!(css, "  margin-bottom: {}px;", spacing.paragraph).unwrap();
    writeln!(css, "  padding-left: 1.5em;").unwrap();
    writeln!(css, "}}").unwrap();

    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::builtin_templates;

    #[test]
    fn test_structural_contract() {
        for template in builtin_templates() {
            let css = to_reflow_css(&template).unwrap();
            assert!(css.contains("body {"), "missing body rule for {}", template.id);
            assert!(
                css.contains(&format!("font-size: {}pt", template.font_size)),
                "missing base font size for {}",
                template.id
            );
            assert!(css.contains("blockquote {"));
            assert!(
                css.contains(&template.colors.accent),
                "blockquote rule must carry accent for {}",
                template.id
            );
            assert!(
                css.contains(&format!("margin-bottom: {}px", template.spacing.paragraph)),
                "paragraph spacing must be pixel margins for {}",
                template.id
            );
        }
    }

    #[test]
    fn test_font_stacks_resolved() {
        let templates = builtin_templates();
        let css = to_reflow_css(&templates[0]).unwrap();
        assert!(css.contains("Source Sans Pro"));
        assert!(css.contains("Georgia"));
    }

    #[test]
    fn test_colors_verbatim() {
        let template = &builtin_templates()[0];
        let css = to_reflow_css(template).unwrap();
        assert!(css.contains(&format!("color: {};", template.colors.body)));
        assert!(css.contains(&format!("color: {};", template.colors.heading)));
    }

    #[test]
    fn test_heading_rules_follow_scale() {
        let template = &builtin_templates()[0];
        let css = to_reflow_css(template).unwrap();
        assert!(css.contains(&format!("font-size: {}pt", template.font_size + 6.0)));
        assert!(css.contains(&format!("font-size: {}pt", template.font_size + 4.0)));
        assert!(css.contains(&format!("font-size: {}pt", template.font_size + 2.0)));
    }

    #[test]
    fn test_deterministic() {
        let template = &builtin_templates()[1];
        assert_eq!(
            to_reflow_css(template).unwrap(),
            to_reflow_css(template).unwrap()
        );
    }

    #[test]
    fn test_invalid_template_rejected() {
        let mut template = builtin_templates().remove(0);
        template.id = String::new();
        assert!(to_reflow_css(&template).is_err());
    }
}
