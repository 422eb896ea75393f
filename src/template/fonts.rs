//! Semantic font token resolution.
//!
//! Templates name fonts with semantic tokens (`var(--font-body)`,
//! `var(--font-heading)`) rather than concrete families, because the two
//! output formats resolve them differently: the paginated engine embeds from
//! a closed registry of built-in names, while reflowable output hands the
//! reading device a CSS font-stack and lets it substitute. Resolution never
//! fails; a token the table does not know falls back to the sans default so a
//! stale template can never block an export.

/// Semantic token for the template's body font.
pub const FONT_BODY: &str = "var(--font-body)";

/// Semantic token for the template's heading font.
pub const FONT_HEADING: &str = "var(--font-heading)";

// Legacy templates stored this literal stack instead of the heading token.
const GEORGIA_ALIAS: &str = "Georgia, serif";

// The paginated engine's built-in font registry.
const PAGINATED_SANS: &str = "Helvetica";
const PAGINATED_SERIF: &str = "Times-Roman";

// Reflow stacks name a concrete face first, then graceful fallbacks.
const REFLOW_SANS: &str = "'Source Sans Pro', 'Helvetica Neue', Arial, sans-serif";
const REFLOW_SERIF: &str = "Georgia, 'Times New Roman', serif";

/// Which publishable output a style is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Page-laid-out drawable elements (PDF-style).
    Paginated,
    /// Markup plus stylesheet for reflowable rendering (EPUB-style).
    Reflow,
}

/// Resolve a template font token to a concrete family for the given format.
pub fn resolve_font_family(token: &str, format: OutputFormat) -> &'static str {
    let token = token.trim();
    match format {
        OutputFormat::Paginated => match token {
            FONT_HEADING | GEORGIA_ALIAS => PAGINATED_SERIF,
            FONT_BODY => PAGINATED_SANS,
            _ => PAGINATED_SANS,
        },
        OutputFormat::Reflow => match token {
            FONT_HEADING | GEORGIA_ALIAS => REFLOW_SERIF,
            FONT_BODY => REFLOW_SANS,
            _ => "sans-serif",
        },
    }
}
