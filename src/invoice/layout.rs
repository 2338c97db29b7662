//! Page geometry and layout heuristics for the invoice renderer.
//!
//! Everything here is pure arithmetic over millimetres so the placement
//! decisions (wrapping, column widths, the side-by-side vs. stacked party
//! cards, page-break points) can be unit tested without producing a PDF.

use super::models::Party;

/// A4 portrait.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 14.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Fixed header band at the top of the first page.
pub const HEADER_HEIGHT: f32 = 26.0;
/// Vertical room reserved for the repeated footer on every page.
pub const FOOTER_RESERVE: f32 = 22.0;

/// Gap between the two side-by-side party cards.
pub const CARD_GUTTER: f32 = 6.0;
pub const CARD_PADDING: f32 = 4.0;

pub const BODY_FONT_SIZE: f32 = 9.0;
pub const LINE_HEIGHT: f32 = 4.6;
pub const TABLE_ROW_PADDING: f32 = 2.0;
pub const TABLE_HEADER_HEIGHT: f32 = 7.0;

const PT_TO_MM: f32 = 0.352_778;
/// Average Helvetica advance as a fraction of the font size. Invoice text is
/// mixed-case prose and digits, where 0.5 em tracks the real width closely
/// enough for wrapping decisions.
const AVG_GLYPH_EM: f32 = 0.5;

/// Approximate rendered width of `text` at `font_size` points, in mm.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_GLYPH_EM * PT_TO_MM
}

/// Greedy word wrap to `max_width` mm. Explicit newlines are respected;
/// a single word wider than the line gets a line of its own rather than
/// being split mid-word.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.split('\n') {
        let raw_line = raw_line.trim();
        if raw_line.is_empty() {
            continue;
        }
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, font_size) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Column widths for the line-items table, in mm.
///
/// Description takes the residual (largest) share; the other columns are
/// fixed percentages of the table width. The tax column collapses to zero
/// when no line carries an itemized tax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableColumns {
    pub index: f32,
    pub description: f32,
    pub quantity: f32,
    pub rate: f32,
    pub tax: f32,
    pub amount: f32,
}

impl TableColumns {
    pub fn total(&self) -> f32 {
        self.index + self.description + self.quantity + self.rate + self.tax + self.amount
    }
}

pub fn table_columns(width: f32, has_tax: bool) -> TableColumns {
    let index = width * 0.06;
    let quantity = width * 0.10;
    let rate = width * 0.14;
    let tax = if has_tax { width * 0.10 } else { 0.0 };
    let amount = width * 0.14;
    let description = width - index - quantity - rate - tax - amount;
    TableColumns {
        index,
        description,
        quantity,
        rate,
        tax,
        amount,
    }
}

/// Height of one party card at `width` mm: title row, name row, wrapped
/// address lines, plus one row per present optional field.
pub fn party_card_height(party: &Party, width: f32) -> f32 {
    let inner = width - 2.0 * CARD_PADDING;
    let mut rows = 2.0; // title + name
    rows += wrap_text(&party.address, inner, BODY_FONT_SIZE).len() as f32;
    for field in [&party.gstin, &party.pan, &party.email, &party.phone] {
        if field.as_deref().is_some_and(|v| !v.trim().is_empty()) {
            rows += 1.0;
        }
    }
    rows * LINE_HEIGHT + 2.0 * CARD_PADDING
}

/// Rough height of the items table: header row plus one padded line per
/// wrapped description line. Used only for the stacking decision and the
/// pre-table page-break check, not for exact placement.
pub fn estimate_table_height(descriptions: &[&str], description_width: f32) -> f32 {
    let mut height = TABLE_HEADER_HEIGHT;
    for description in descriptions {
        let lines = wrap_text(description, description_width, BODY_FONT_SIZE)
            .len()
            .max(1) as f32;
        height += lines * LINE_HEIGHT + 2.0 * TABLE_ROW_PADDING;
    }
    height
}

/// Two-branch card layout heuristic: render the party cards side-by-side
/// unless that band plus the estimated table would run past the space left
/// above the footer, in which case stack them full-width (full-width cards
/// wrap less and the table gets a fresh overflow check of its own).
pub fn should_stack_cards(side_by_side_height: f32, estimated_table_height: f32, remaining: f32) -> bool {
    side_by_side_height + estimated_table_height > remaining - FOOTER_RESERVE
}
