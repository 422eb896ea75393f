//! # folio
//!
//! The document transformation and patch engine behind a book-publishing
//! product. It turns free-form rich-text chapter content into two
//! structurally different publishable outputs under one abstract visual
//! template, and applies AI-suggested corrections back into that content even
//! when the quoted text no longer matches byte-for-byte.
//!
//! ## Features
//!
//! - Tolerant rich-text parsing into a closed block/run tree
//! - Template resolution into paginated style sheets and reflow CSS
//! - Semantic font tokens with per-format resolution tables
//! - Three-tier fuzzy patching (exact, tag-insensitive, whitespace-normalized)
//!
//! ## Quick Start
//!
//! ```
//! use folio::{apply_patch, builtin_templates, to_elements, to_paginated_styles, to_reflow_css};
//!
//! let templates = builtin_templates();
//!
//! // Paginated export: one drawable element per block.
//! let styles = to_paginated_styles(&templates[0]).unwrap();
//! let elements = to_elements("<h1>One</h1><p>It began <em>quietly</em>.</p>", &styles);
//! assert_eq!(elements.len(), 2);
//!
//! // Reflow export: CSS attached to the original markup.
//! let css = to_reflow_css(&templates[0]).unwrap();
//! assert!(css.contains("body {"));
//!
//! // Patch a suggested fix through embedded markup.
//! let outcome = apply_patch("<p>Hello <strong>world</strong></p>", "Hello world", "Goodbye world");
//! assert!(outcome.result.unwrap().contains("Goodbye world"));
//! ```
//!
//! Everything is a pure, synchronous transform over in-memory data: no I/O,
//! no global state, safe to fan out across chapters.

pub mod content;
pub mod error;
pub mod export;
pub mod patch;
pub mod style;
pub mod template;

pub use content::{Node, Run, parse, strip_tags};
pub use error::{Error, Result};
pub use export::{Element, to_elements, to_reflow_css};
pub use patch::{PatchOutcome, apply_patch};
pub use style::{Color, PageStyles, TextStyle, chapter_title_font_size, to_paginated_styles};
pub use template::fonts::{OutputFormat, resolve_font_family};
pub use template::{Template, builtin_templates, find_template};
