//! Structural description of a fixed-layout page.
//!
//! A [`Document`] is a vertical stack of [`Row`]s. Each row has a fixed height
//! and is divided into columns on a [`GRID_COLUMNS`]-wide grid; a column holds
//! one styled [`TextBlock`]. The model carries no rendering state and can be
//! compared structurally.

/// Number of grid columns a row is divided into.
pub const GRID_COLUMNS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Typeface, weight and size of a text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    /// Font size in points.
    pub size_pt: f32,
}

impl TextStyle {
    pub const DEFAULT_SIZE_PT: f32 = 10.0;

    pub const fn bold(size_pt: f32) -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Bold,
            size_pt,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Normal,
            size_pt: Self::DEFAULT_SIZE_PT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub content: String,
    pub style: TextStyle,
}

impl TextBlock {
    pub fn new(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, TextStyle::default())
    }
}

/// A column spanning `span` grid units.
#[derive(Debug, Clone, PartialEq)]
pub struct Col {
    pub span: u8,
    pub text: TextBlock,
}

impl Col {
    /// Creates a column; `span` is clamped to `1..=GRID_COLUMNS`.
    pub fn new(span: u8, text: TextBlock) -> Self {
        Self {
            span: span.clamp(1, GRID_COLUMNS),
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Minimum row height in millimetres.
    pub height_mm: f32,
    pub cols: Vec<Col>,
}

impl Row {
    pub fn new(height_mm: f32) -> Self {
        Self {
            height_mm,
            cols: Vec::new(),
        }
    }

    pub fn col(mut self, span: u8, text: TextBlock) -> Self {
        self.cols.push(Col::new(span, text));
        self
    }

    /// Total grid units occupied by this row's columns.
    pub fn span(&self) -> u32 {
        self.cols.iter().map(|c| u32::from(c.span)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub title: String,
    pub rows: Vec<Row>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    /// Iterates over every text block in layout order.
    pub fn texts(&self) -> impl Iterator<Item = &TextBlock> {
        self.rows.iter().flat_map(|r| r.cols.iter().map(|c| &c.text))
    }
}
