//! Rendering module for turning HTML fragments into styled documents.

mod options;
mod styles;
mod template;

pub use options::{FontOptions, RenderOptions};
pub use styles::{CustomStyles, StyleRule};
pub use template::{current_timestamp, HtmlGenerator, HtmlTemplate, TIMESTAMP_FORMAT, VERSION};
