//! Output generation for the two publishable formats.
//!
//! The paginated generator turns parsed content plus a resolved
//! [`PageStyles`](crate::style::PageStyles) into drawable [`Element`]s for
//! the page writer; the reflow generator produces the CSS text that styles
//! the original markup on a reflowable reader. Binary container assembly
//! (PDF byte streams, EPUB packages) is a downstream collaborator's job.

pub mod paginated;
pub mod reflow;

pub use paginated::{Element, to_elements};
pub use reflow::to_reflow_css;
