use crate::document::{FontWeight, TextStyle};

/// Millimetres per typographic point.
pub const PT_TO_MM: f32 = 0.352_778;

const LINE_SPACING: f32 = 1.2;
// Average Helvetica advance width as a fraction of the em size.
const NORMAL_ADVANCE: f32 = 0.5;
const BOLD_ADVANCE: f32 = 0.55;

/// Page geometry in millimetres. Defaults to A4 with 10 mm margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
}

impl PageLayout {
    pub const A4: Self = Self {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_top_mm: 10.0,
        margin_right_mm: 10.0,
        margin_bottom_mm: 10.0,
    };

    pub fn content_width_mm(&self) -> f32 {
        (self.width_mm - self.margin_left_mm - self.margin_right_mm).max(0.0)
    }

    /// Lowest distance from the top edge that content may reach.
    pub fn content_bottom_mm(&self) -> f32 {
        self.height_mm - self.margin_bottom_mm
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::A4
    }
}

pub fn line_height_mm(style: &TextStyle) -> f32 {
    style.size_pt * PT_TO_MM * LINE_SPACING
}

fn glyph_width_mm(style: &TextStyle) -> f32 {
    let advance = match style.weight {
        FontWeight::Normal => NORMAL_ADVANCE,
        FontWeight::Bold => BOLD_ADVANCE,
    };
    style.size_pt * PT_TO_MM * advance
}

/// Greedily wraps `text` into lines that fit `width_mm` at `style`.
///
/// Widths are estimated from an average glyph advance, so the result is an
/// approximation for proportional fonts. Words longer than a line are split.
/// Always returns at least one line, possibly empty.
pub fn wrap_text(text: &str, width_mm: f32, style: &TextStyle) -> Vec<String> {
    let glyph = glyph_width_mm(style);
    let max_chars = if glyph > 0.0 {
        ((width_mm / glyph).floor() as usize).max(1)
    } else {
        usize::MAX
    };

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > max_chars {
            if current_len > 0 {
                lines.push(core::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(max_chars);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }

        let needed = if current_len == 0 {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            lines.push(core::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}
