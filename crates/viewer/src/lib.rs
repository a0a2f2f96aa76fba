//! Case viewer: searchable list + classified detail rendering.
//!
//! The [`Viewer`] controller owns the working record set and the current
//! selection; rendering is pure string assembly over that state so it can be
//! unit-tested without a display surface. [`page`] is the thin adapter that
//! wraps rendered fragments into a standalone HTML document.
//!
//! Class names emitted here (`case-item`, `active`, `pdf-badge`, `syllabus`,
//! `paragraph`, `highlighted`, `highlight-<category>`) are a public styling
//! contract; downstream stylesheets depend on the exact spelling.

mod html;
pub mod page;
mod render;
mod viewer;

pub use html::escape_html;
pub use render::{render_detail, render_list, render_load_error, render_stats};
pub use viewer::Viewer;
