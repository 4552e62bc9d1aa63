//! Data model shared by extraction, summarization and rendering.
//!
//! Pages flow in as [`PageText`], become [`Candidate`]s during scoring and
//! leave as [`SummaryPoint`]s once selected and prepared for display.

mod document;
mod page;
mod settings;
mod summary;

pub use document::{DocumentInfo, DocumentMetadata, SourceDocument};
pub use page::PageText;
pub use settings::{SelectionSettings, SummaryFocus, SummaryLength, SummaryStyle};
pub use summary::{Candidate, SummaryPoint, TextSpan};
