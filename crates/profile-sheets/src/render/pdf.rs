use super::{
    RenderError, Renderer,
    layout::{PT_TO_MM, PageLayout, line_height_mm, wrap_text},
};
use crate::document::{Document, FontFamily, FontWeight, GRID_COLUMNS, TextStyle};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

const LAYER_NAME: &str = "content";

/// Renders documents to PDF using the built-in Helvetica faces.
///
/// Rows are laid out top to bottom. A row is at least as tall as its declared
/// height and grows to fit wrapped text; a row that no longer fits on the page
/// starts a new one.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer {
    page: PageLayout,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn select(&self, style: &TextStyle) -> &IndirectFontRef {
        match (style.family, style.weight) {
            (FontFamily::Helvetica, FontWeight::Normal) => &self.regular,
            (FontFamily::Helvetica, FontWeight::Bold) => &self.bold,
        }
    }
}

struct PlacedCol<'a> {
    x_mm: f32,
    style: &'a TextStyle,
    lines: Vec<String>,
}

impl Renderer for PdfRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError> {
        let page = &self.page;
        let (pdf, first_page, first_layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(page.width_mm),
            Mm(page.height_mm),
            LAYER_NAME,
        );

        let fonts = Fonts {
            regular: pdf.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: pdf.add_builtin_font(BuiltinFont::HelveticaBold)?,
        };

        let mut layer: PdfLayerReference = pdf.get_page(first_page).get_layer(first_layer);
        let content_width = page.content_width_mm();
        let mut cursor = page.margin_top_mm;

        for row in &document.rows {
            let units = row.span().max(u32::from(GRID_COLUMNS)) as f32;
            let unit_width = content_width / units;

            let mut offset = 0_u32;
            let mut placed = Vec::with_capacity(row.cols.len());
            for col in &row.cols {
                let width = unit_width * f32::from(col.span);
                placed.push(PlacedCol {
                    x_mm: page.margin_left_mm + unit_width * offset as f32,
                    style: &col.text.style,
                    lines: wrap_text(&col.text.content, width, &col.text.style),
                });
                offset += u32::from(col.span);
            }

            let needed = placed
                .iter()
                .map(|p| p.lines.len() as f32 * line_height_mm(p.style))
                .fold(0.0_f32, f32::max);
            let height = row.height_mm.max(needed);

            if cursor + height > page.content_bottom_mm() && cursor > page.margin_top_mm {
                let (next_page, next_layer) =
                    pdf.add_page(Mm(page.width_mm), Mm(page.height_mm), LAYER_NAME);
                layer = pdf.get_page(next_page).get_layer(next_layer);
                cursor = page.margin_top_mm;
            }

            for col in &placed {
                let font = fonts.select(col.style);
                let ascent = col.style.size_pt * PT_TO_MM;
                let line_height = line_height_mm(col.style);

                for (i, line) in col.lines.iter().enumerate() {
                    if line.is_empty() {
                        continue;
                    }
                    // PDF user space grows upwards from the bottom edge.
                    let baseline = cursor + ascent + line_height * i as f32;
                    layer.use_text(
                        line.as_str(),
                        col.style.size_pt,
                        Mm(col.x_mm),
                        Mm(page.height_mm - baseline),
                        font,
                    );
                }
            }

            cursor += height;
        }

        Ok(pdf.save_to_bytes()?)
    }
}
