//! Rendering options.

/// Options for serializing a summary.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix the output with a document header
    pub include_header: bool,

    /// Append page references to each line
    pub page_refs: bool,

    /// Mark emphasized spans (Markdown only)
    pub emphasis: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the document header.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Enable or disable page references.
    pub fn with_page_refs(mut self, page_refs: bool) -> Self {
        self.page_refs = page_refs;
        self
    }

    /// Enable or disable emphasis markup.
    pub fn with_emphasis(mut self, emphasis: bool) -> Self {
        self.emphasis = emphasis;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_header: false,
            page_refs: true,
            emphasis: true,
        }
    }
}
