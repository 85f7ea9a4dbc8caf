//! A4 document builder over `pdf-writer`.
//!
//! Layout arithmetic happens in millimeters with the origin at the top-left
//! corner of the page; coordinates are converted to PDF points (and the
//! y-axis flipped) only when an operator is emitted. The activity renderers
//! share the fpdf-style primitives here: bordered cells with vertically
//! centered text, wrapped blocks, and a top-down cursor that breaks to a new
//! page at the bottom margin.

use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{Content, Filter, Pdf, Rect, Ref};

use crate::fonts::{self, Font};

/// A4 geometry in millimeters.
pub const PAGE_W: f32 = 210.0;
pub const PAGE_H: f32 = 297.0;
pub const MARGIN: f32 = 15.0;
/// Printable width between the margins.
pub const USABLE_W: f32 = PAGE_W - 2.0 * MARGIN;
/// Printable height between the margins.
pub const USABLE_H: f32 = PAGE_H - 2.0 * MARGIN;
/// Cursor position past which a row no longer fits.
pub const BREAK_Y: f32 = PAGE_H - MARGIN;

const PT_PER_MM: f32 = 72.0 / 25.4;
/// Horizontal text inset inside a cell.
const CELL_PAD: f32 = 1.0;
/// Border stroke width in points (0.2 mm).
const BORDER_PT: f32 = 0.2 * PT_PER_MM;

pub type Rgb = (u8, u8, u8);
pub const BLACK: Rgb = (0, 0, 0);
/// The distinguishing answer-key color.
pub const KEY_RED: Rgb = (200, 0, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One in-progress document: finished page streams plus the cursor and text
/// state every renderer shares.
pub struct Doc {
    pages: Vec<Content>,
    font: Font,
    size: f32,
    text_color: Rgb,
    fill_color: Rgb,
    /// Cursor distance from the top edge, in mm.
    pub y: f32,
}

impl Doc {
    pub fn new() -> Self {
        Doc {
            pages: vec![Content::new()],
            font: Font::Helvetica,
            size: 12.0,
            text_color: BLACK,
            fill_color: (255, 255, 255),
            y: MARGIN,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn add_page(&mut self) {
        self.pages.push(Content::new());
        self.y = MARGIN;
    }

    pub fn set_font(&mut self, font: Font, size: f32) {
        self.font = font;
        self.size = size;
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    /// Advance the cursor by `h`.
    pub fn ln(&mut self, h: f32) {
        self.y += h;
    }

    /// Break to a new page if a row of height `h` no longer fits.
    pub fn ensure(&mut self, h: f32) {
        if self.y + h > BREAK_Y {
            self.add_page();
        }
    }

    /// Font size expressed in page millimeters.
    fn size_mm(&self) -> f32 {
        self.size / PT_PER_MM
    }

    fn cur(&mut self) -> &mut Content {
        // `new` seeds the first page, so there is always a current one.
        self.pages.last_mut().unwrap()
    }

    fn emit_text(&mut self, x_mm: f32, baseline_mm: f32, text: &str) {
        let font = self.font;
        let size = self.size;
        let (r, g, b) = self.text_color;
        let bytes = fonts::winansi(text);
        let x = x_mm * PT_PER_MM;
        let y = (PAGE_H - baseline_mm) * PT_PER_MM;
        let content = self.cur();
        content.begin_text();
        content.set_font(font.resource(), size);
        content.set_fill_rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        );
        content.next_line(x, y);
        content.show(pdf_writer::Str(&bytes));
        content.end_text();
    }

    /// Bordered rectangle at absolute page coordinates (mm from top-left).
    pub fn rect(&mut self, x: f32, y_top: f32, w: f32, h: f32) {
        let rect = (
            x * PT_PER_MM,
            (PAGE_H - y_top - h) * PT_PER_MM,
            w * PT_PER_MM,
            h * PT_PER_MM,
        );
        let content = self.cur();
        content.set_line_width(BORDER_PT);
        content.rect(rect.0, rect.1, rect.2, rect.3);
        content.stroke();
    }

    fn fill_rect(&mut self, x: f32, y_top: f32, w: f32, h: f32) {
        let (r, g, b) = self.fill_color;
        let rect = (
            x * PT_PER_MM,
            (PAGE_H - y_top - h) * PT_PER_MM,
            w * PT_PER_MM,
            h * PT_PER_MM,
        );
        let content = self.cur();
        content.set_fill_rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        );
        content.rect(rect.0, rect.1, rect.2, rect.3);
        content.fill_nonzero();
    }

    /// Cell at the current cursor row. The cursor itself is untouched so a
    /// row of cells can share it; advance with `ln` afterwards.
    pub fn cell(&mut self, x: f32, w: f32, h: f32, text: &str, align: Align, border: bool, fill: bool) {
        self.cell_at(x, self.y, w, h, text, align, border, fill);
    }

    /// Cell at absolute page coordinates.
    pub fn cell_at(
        &mut self,
        x: f32,
        y_top: f32,
        w: f32,
        h: f32,
        text: &str,
        align: Align,
        border: bool,
        fill: bool,
    ) {
        if fill {
            self.fill_rect(x, y_top, w, h);
        }
        if border {
            self.rect(x, y_top, w, h);
        }
        if text.is_empty() {
            return;
        }
        let tw = fonts::text_width(self.font, self.size, text) / PT_PER_MM;
        let tx = match align {
            Align::Left => x + CELL_PAD,
            Align::Center => x + (w - tw) / 2.0,
            Align::Right => x + w - tw - CELL_PAD,
        };
        // Baseline a little under the vertical center; the cap height of the
        // standard fonts is ~0.72 em.
        let baseline = y_top + h / 2.0 + 0.36 * self.size_mm();
        self.emit_text(tx.max(x + 0.2), baseline, text);
    }

    /// Wrapped text block starting at the cursor. Advances the cursor one
    /// line at a time, page-breaking like any other row.
    pub fn multi_cell(&mut self, x: f32, w: f32, line_h: f32, text: &str, align: Align) {
        let max_w = (w - 2.0 * CELL_PAD) * PT_PER_MM;
        for line in fonts::wrap(self.font, self.size, max_w, text) {
            self.ensure(line_h);
            self.cell(x, w, line_h, &line, align, false, false);
            self.ln(line_h);
        }
    }

    /// Wrapped text block at absolute coordinates (no page breaking; used by
    /// the card layouts). Returns the y just below the last line.
    pub fn multi_cell_at(&mut self, x: f32, y_top: f32, w: f32, line_h: f32, text: &str) -> f32 {
        let max_w = (w - 2.0 * CELL_PAD) * PT_PER_MM;
        let mut y = y_top;
        for line in fonts::wrap(self.font, self.size, max_w, text) {
            self.cell_at(x, y, w, line_h, &line, Align::Left, false, false);
            y += line_h;
        }
        y
    }

    /// Assemble the PDF: pages tree, standard-font resources, and one
    /// Flate-compressed content stream per page.
    pub fn finish(self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };
        let catalog_id = alloc();
        let pages_id = alloc();
        let font_ids: Vec<(Font, Ref)> = Font::ALL.iter().map(|&f| (f, alloc())).collect();
        let page_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        for &(font, id) in &font_ids {
            pdf.type1_font(id)
                .base_font(pdf_writer::Name(font.base_name()))
                .encoding_predefined(pdf_writer::Name(b"WinAnsiEncoding"));
        }

        let media_box = Rect::new(0.0, 0.0, PAGE_W * PT_PER_MM, PAGE_H * PT_PER_MM);
        for (i, content) in self.pages.into_iter().enumerate() {
            let compressed = compress_to_vec_zlib(&content.finish(), 6);
            pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
            let mut page = pdf.page(page_ids[i]);
            page.media_box(media_box)
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            let mut font_dict = resources.fonts();
            for &(font, id) in &font_ids {
                font_dict.pair(font.resource(), id);
            }
        }

        pdf.finish()
    }
}
