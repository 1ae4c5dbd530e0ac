//! Lays out a [`PaginatedReport`] on A4 pages and writes it with `lopdf`.
//!
//! Text uses the built-in Helvetica faces, so nothing is embedded and the
//! output depends only on the block sequence.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use super::paginated::{Block, PaginatedReport, Table, TableStyle};
use super::text::{encode, wrap, Font};
use crate::error::{AgendaError, Result};
use crate::models::ExportFormat;

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 72.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const CELL_PADDING: f32 = 4.0;
const BULLET_INDENT: f32 = 18.0;
const GRID_WIDTH: f32 = 0.75;

type Rgb = [f32; 3];

const BLACK: Rgb = [0.0, 0.0, 0.0];
const DARK_BLUE: Rgb = [0.0, 0.0, 0.545];
const GREY: Rgb = [0.502, 0.502, 0.502];
const LIGHT_GREY: Rgb = [0.827, 0.827, 0.827];
const WHITE_SMOKE: Rgb = [0.961, 0.961, 0.961];

struct TextStyle {
    font: Font,
    size: f32,
    color: Rgb,
    centered: bool,
}

impl TextStyle {
    fn leading(&self) -> f32 {
        self.size * 1.2
    }
}

const TITLE: TextStyle = TextStyle {
    font: Font::Bold,
    size: 24.0,
    color: DARK_BLUE,
    centered: true,
};
const HEADING: TextStyle = TextStyle {
    font: Font::Bold,
    size: 16.0,
    color: DARK_BLUE,
    centered: false,
};
const CARD_HEADING: TextStyle = TextStyle {
    font: Font::Bold,
    size: 12.0,
    color: BLACK,
    centered: false,
};
const LABEL: TextStyle = TextStyle {
    font: Font::Bold,
    size: 10.0,
    color: BLACK,
    centered: false,
};
const BODY: TextStyle = TextStyle {
    font: Font::Regular,
    size: 10.0,
    color: BLACK,
    centered: false,
};

impl TableStyle {
    fn font_size(self) -> f32 {
        match self {
            TableStyle::Details => 9.0,
            TableStyle::Header => 10.0,
        }
    }

    fn font(self, row: usize, col: usize) -> Font {
        let emphasized = match self {
            TableStyle::Details => col == 0,
            TableStyle::Header => row == 0,
        };
        if emphasized {
            Font::Bold
        } else {
            Font::Regular
        }
    }

    fn fill(self, row: usize, col: usize) -> Option<Rgb> {
        match self {
            TableStyle::Details if col == 0 => Some(LIGHT_GREY),
            TableStyle::Header if row == 0 => Some(GREY),
            _ => None,
        }
    }

    fn text_color(self, row: usize) -> Rgb {
        match self {
            TableStyle::Header if row == 0 => WHITE_SMOKE,
            _ => BLACK,
        }
    }

    fn centered(self) -> bool {
        self == TableStyle::Header
    }
}

/// Accumulates drawing operations page by page, top to bottom.
struct PageWriter {
    pages: Vec<Vec<Operation>>,
    ops: Vec<Operation>,
    /// Top edge of the remaining free space on the current page
    y: f32,
}

impl PageWriter {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.ops));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Starts a new page unless `height` still fits on this one.
    fn reserve(&mut self, height: f32) {
        if self.y - height < MARGIN && !self.ops.is_empty() {
            self.new_page();
        }
    }

    fn space(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.new_page();
        } else {
            self.y -= height;
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Title(text) => self.text(text, &TITLE),
            Block::Heading(text) => {
                self.space(6.0);
                self.text(text, &HEADING);
                self.space(6.0);
            }
            Block::CardHeading(text) => {
                self.space(4.0);
                self.text(text, &CARD_HEADING);
                self.space(2.0);
            }
            Block::Label(text) => self.text(text, &LABEL),
            Block::Paragraph(text) => self.text(text, &BODY),
            Block::Bullet(text) => self.bullet(text),
            Block::Table(table) => {
                self.space(4.0);
                self.table(table);
                self.space(6.0);
            }
            Block::Spacer(height) => self.space(*height),
        }
    }

    fn text(&mut self, text: &str, style: &TextStyle) {
        let leading = style.leading();
        for line in wrap(text, style.font, style.size, CONTENT_WIDTH) {
            self.reserve(leading);
            let x = if style.centered {
                MARGIN + (CONTENT_WIDTH - style.font.measure(&line, style.size)).max(0.0) / 2.0
            } else {
                MARGIN
            };
            self.show(&line, style.font, style.size, style.color, x, self.y - style.size);
            self.y -= leading;
        }
    }

    fn bullet(&mut self, text: &str) {
        let leading = BODY.leading();
        let lines = wrap(text, BODY.font, BODY.size, CONTENT_WIDTH - BULLET_INDENT);
        for (index, line) in lines.iter().enumerate() {
            self.reserve(leading);
            let baseline = self.y - BODY.size;
            if index == 0 {
                self.show("•", BODY.font, BODY.size, BODY.color, MARGIN + 6.0, baseline);
            }
            self.show(line, BODY.font, BODY.size, BODY.color, MARGIN + BULLET_INDENT, baseline);
            self.y -= leading;
        }
    }

    /// Whole table lines that fit in a cell between `self.y` and the bottom
    /// margin.
    fn lines_fitting(&self, leading: f32) -> usize {
        let room = (self.y - MARGIN - 2.0 * CELL_PADDING) / leading;
        if room < 1.0 {
            0
        } else {
            room as usize
        }
    }

    /// Draws a bordered table centered between the margins. A row that fits
    /// on one page is never split; a taller row continues on the next page.
    fn table(&mut self, table: &Table) {
        let total: f32 = table.widths.iter().sum();
        let left = MARGIN + (CONTENT_WIDTH - total).max(0.0) / 2.0;
        let size = table.style.font_size();
        let leading = size * 1.2;
        let page_lines = ((PAGE_HEIGHT - 2.0 * MARGIN - 2.0 * CELL_PADDING) / leading) as usize;

        for (row_index, row) in table.rows.iter().enumerate() {
            let cells: Vec<(Font, Vec<String>)> = row
                .iter()
                .zip(&table.widths)
                .enumerate()
                .map(|(col, (cell, width))| {
                    let font = table.style.font(row_index, col);
                    (font, wrap(cell, font, size, width - 2.0 * CELL_PADDING))
                })
                .collect();
            let line_count = cells.iter().map(|(_, lines)| lines.len()).max().unwrap_or(1);
            let color = table.style.text_color(row_index);

            let mut first = 0;
            while first < line_count {
                let wanted = (line_count - first).min(page_lines);
                let fitting = self.lines_fitting(leading);
                if fitting < wanted && (fitting == 0 || !self.ops.is_empty()) {
                    self.new_page();
                }
                let taken = wanted.min(self.lines_fitting(leading)).max(1);

                let height = taken as f32 * leading + 2.0 * CELL_PADDING;
                let top = self.y;
                let bottom = top - height;
                let mut x = left;
                for (col, ((font, lines), width)) in cells.iter().zip(&table.widths).enumerate() {
                    if let Some(fill) = table.style.fill(row_index, col) {
                        self.rect(x, bottom, *width, height, fill, true);
                    }
                    let visible = &lines[first.min(lines.len())..(first + taken).min(lines.len())];
                    for (n, line) in visible.iter().enumerate() {
                        let baseline = top - CELL_PADDING - size - n as f32 * leading;
                        let line_x = if table.style.centered() {
                            x + (width - font.measure(line, size)).max(0.0) / 2.0
                        } else {
                            x + CELL_PADDING
                        };
                        self.show(line, *font, size, color, line_x, baseline);
                    }
                    self.rect(x, bottom, *width, height, BLACK, false);
                    x += width;
                }
                self.y = bottom;
                first += taken;
            }
        }
    }

    fn show(&mut self, text: &str, font: Font, size: f32, color: Rgb, x: f32, y: f32) {
        self.ops.extend([
            Operation::new("BT", vec![]),
            Operation::new("rg", color.iter().copied().map(Object::from).collect()),
            Operation::new(
                "Tf",
                vec![Object::Name(font.resource().as_bytes().to_vec()), Object::from(size)],
            ),
            Operation::new("Td", vec![Object::from(x), Object::from(y)]),
            Operation::new("Tj", vec![Object::String(encode(text), StringFormat::Literal)]),
            Operation::new("ET", vec![]),
        ]);
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb, filled: bool) {
        let (paint, op) = if filled { ("rg", "f") } else { ("RG", "S") };
        self.ops.extend([
            Operation::new("q", vec![]),
            Operation::new(paint, color.iter().copied().map(Object::from).collect()),
            Operation::new("w", vec![Object::from(GRID_WIDTH)]),
            Operation::new(
                "re",
                vec![
                    Object::from(x),
                    Object::from(y),
                    Object::from(width),
                    Object::from(height),
                ],
            ),
            Operation::new(op, vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.pages.push(self.ops);
        }
        self.pages
    }
}

impl PaginatedReport {
    /// Lays out and writes the document to memory.
    ///
    /// # Errors
    ///
    /// Returns `AgendaError::RenderFailure` if a content stream cannot be
    /// encoded or the document cannot be written.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let mut writer = PageWriter::new();
        for block in &self.blocks {
            writer.block(block);
        }
        write_document(writer.finish())
            .map_err(|message| AgendaError::render_failure(ExportFormat::Paginated, message))
    }
}

fn write_document(pages: Vec<Vec<Operation>>) -> std::result::Result<Vec<u8>, String> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary(Font::Regular));
    let bold_id = doc.add_object(font_dictionary(Font::Bold));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Font::Regular.resource() => regular_id,
            Font::Bold.resource() => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations }.encode().map_err(|e| e.to_string())?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::from(PAGE_WIDTH),
                Object::from(PAGE_HEIGHT),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(|e| e.to_string())?;
    Ok(bytes)
}

fn font_dictionary(font: Font) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}
