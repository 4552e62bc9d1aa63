//! Rendering module for laying out selected points and serializing summaries.
//!
//! [`format_output`] turns selected candidates into a [`RenderedOutput`] of
//! styled blocks. The serializers then write a [`Summary`] (output plus
//! document header) as plain text, Markdown, JSON or an [`ExportDocument`].

mod emphasis;
mod export;
mod json;
mod layout;
mod markdown;
mod options;
mod output;
mod result;
mod text;

pub use emphasis::{emphasize, ensure_terminal};
pub use export::{to_export_document, ExportDocument, ExportParagraph};
pub use json::{to_json, JsonFormat};
pub use layout::{format_output, outline_shape, prepare_point, OUTLINE_PART, PARAGRAPH_GROUP};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use output::{RenderedOutput, SummaryBlock};
pub use result::Summary;
pub use text::to_text;
