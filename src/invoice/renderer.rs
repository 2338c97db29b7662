//! PDF drawing for invoice documents.
//!
//! The renderer walks a vertical cursor down each page, breaking to a new
//! page whenever a block would intrude into the reserved footer band. The
//! footer itself (divider, branding, page numbers) is drawn in a final pass
//! once the total page count is known.

use printpdf::image_crate;
use printpdf::path::PaintMode;
use printpdf::{
    Actions, BuiltinFont, Color, HighlightingMode, IndirectFontRef, Line, LinkAnnotation, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point,
    Rect, Rgb,
};

use super::layout::{
    estimate_table_height, party_card_height, should_stack_cards, table_columns, text_width,
    wrap_text, TableColumns, BODY_FONT_SIZE, CARD_GUTTER, CARD_PADDING, CONTENT_WIDTH,
    FOOTER_RESERVE, HEADER_HEIGHT, LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
    TABLE_HEADER_HEIGHT, TABLE_ROW_PADDING,
};
use super::models::{InvoiceDocument, LineItem, Party};
use super::words::amount_in_words;
use super::RenderError;

const LOGO_HEIGHT: f32 = 7.0;
const LOGO_DPI: f32 = 300.0;
const TOTALS_WIDTH: f32 = 70.0;

fn ink() -> Color {
    Color::Rgb(Rgb::new(0.13, 0.15, 0.19, None))
}

fn muted() -> Color {
    Color::Rgb(Rgb::new(0.45, 0.48, 0.53, None))
}

fn band() -> Color {
    Color::Rgb(Rgb::new(0.16, 0.21, 0.32, None))
}

fn paper() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn hairline() -> Color {
    Color::Rgb(Rgb::new(0.80, 0.82, 0.85, None))
}

/// A finished document plus the artifact name the client should save it as.
#[derive(Debug)]
pub struct GeneratedInvoice {
    pub filename: String,
    pub pdf: Vec<u8>,
}

struct PageWriter {
    doc: PdfDocumentReference,
    pages: Vec<(PdfPageIndex, PdfLayerIndex)>,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl PageWriter {
    fn new(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer_ref = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            pages: vec![(page, layer)],
            layer: layer_ref,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.pages.push((page, layer));
        self.y = PAGE_HEIGHT - MARGIN;
    }

    /// Break to a new page when `needed` mm would cross into the footer band.
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < FOOTER_RESERVE {
            self.new_page();
        }
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32) {
        self.layer.use_text(text, size, Mm(x), Mm(y), &self.regular);
    }

    fn bold_text(&self, text: &str, size: f32, x: f32, y: f32) {
        self.layer.use_text(text, size, Mm(x), Mm(y), &self.bold);
    }

    fn text_right(&self, text: &str, size: f32, right: f32, y: f32, bold: bool) {
        let x = right - text_width(text, size);
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn set_fill(&self, color: Color) {
        self.layer.set_fill_color(color);
    }

    fn filled_rect(&self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.layer.set_fill_color(color);
        self.layer
            .add_rect(Rect::new(Mm(x), Mm(y), Mm(x + width), Mm(y + height)).with_mode(PaintMode::Fill));
    }

    fn hline(&self, x1: f32, x2: f32, y: f32, color: Color, thickness: f32) {
        self.layer.set_outline_color(color);
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(y)), false),
                (Point::new(Mm(x2), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    fn outline_rect(&self, x: f32, y: f32, width: f32, height: f32) {
        self.layer.set_outline_color(hairline());
        self.layer.set_outline_thickness(0.4);
        self.layer
            .add_rect(Rect::new(Mm(x), Mm(y), Mm(x + width), Mm(y + height)).with_mode(PaintMode::Stroke));
    }
}

/// Render an invoice to PDF bytes.
///
/// `logo` carries the already-fetched footer logo image, if any; bytes that
/// fail to decode are logged and skipped so a broken logo never blocks the
/// invoice itself.
pub fn render(invoice: &InvoiceDocument, logo: Option<&[u8]>) -> Result<GeneratedInvoice, RenderError> {
    let title = invoice
        .number
        .as_deref()
        .map(|n| format!("Invoice {n}"))
        .unwrap_or_else(|| "Invoice".to_string());
    let mut writer = PageWriter::new(&title)?;

    let logo_image = logo.and_then(|bytes| match image_crate::load_from_memory(bytes) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            log::warn!("Footer logo could not be decoded, rendering without it: {err}");
            None
        }
    });

    draw_header(&mut writer, invoice);
    draw_parties(&mut writer, invoice);
    draw_metadata(&mut writer, invoice);
    draw_items_table(&mut writer, invoice);
    draw_totals(&mut writer, invoice);
    draw_payment_summary(&mut writer, invoice);
    draw_text_block(&mut writer, "Notes", invoice.notes.as_deref());
    draw_text_block(&mut writer, "Terms", invoice.terms.as_deref());
    draw_footers(&writer, invoice, logo_image.as_ref());

    let pdf = writer.doc.save_to_bytes()?;
    Ok(GeneratedInvoice {
        filename: invoice.file_name(),
        pdf,
    })
}

fn draw_header(writer: &mut PageWriter, invoice: &InvoiceDocument) {
    writer.filled_rect(
        0.0,
        PAGE_HEIGHT - HEADER_HEIGHT,
        PAGE_WIDTH,
        HEADER_HEIGHT,
        band(),
    );
    writer.set_fill(paper());
    writer.bold_text("INVOICE", 18.0, MARGIN, PAGE_HEIGHT - 16.0);
    if let Some(number) = invoice.number.as_deref() {
        writer.text_right(number, 11.0, PAGE_WIDTH - MARGIN, PAGE_HEIGHT - 16.0, true);
    }
    writer.y = PAGE_HEIGHT - HEADER_HEIGHT - 8.0;
}

fn draw_parties(writer: &mut PageWriter, invoice: &InvoiceDocument) {
    let half = (CONTENT_WIDTH - CARD_GUTTER) / 2.0;
    let by_height = party_card_height(&invoice.billed_by, half);
    let to_height = party_card_height(&invoice.billed_to, half);
    let side_by_side = by_height.max(to_height);

    let columns = table_columns(CONTENT_WIDTH, invoice.has_itemized_tax());
    let descriptions: Vec<&str> = invoice.items.iter().map(|i| i.description.as_str()).collect();
    let estimated_table = estimate_table_height(
        &descriptions,
        columns.description - 2.0 * TABLE_ROW_PADDING,
    );

    if should_stack_cards(side_by_side, estimated_table, writer.y) {
        let top = writer.y;
        let used = draw_party_card(writer, "Billed By", &invoice.billed_by, MARGIN, top, CONTENT_WIDTH);
        let top = top - used - 4.0;
        let used = draw_party_card(writer, "Billed To", &invoice.billed_to, MARGIN, top, CONTENT_WIDTH);
        writer.y = top - used - 6.0;
    } else {
        let top = writer.y;
        draw_party_card(writer, "Billed By", &invoice.billed_by, MARGIN, top, half);
        draw_party_card(
            writer,
            "Billed To",
            &invoice.billed_to,
            MARGIN + half + CARD_GUTTER,
            top,
            half,
        );
        writer.y = top - side_by_side - 6.0;
    }
}

fn draw_party_card(
    writer: &mut PageWriter,
    title: &str,
    party: &Party,
    x: f32,
    top: f32,
    width: f32,
) -> f32 {
    let height = party_card_height(party, width);
    writer.outline_rect(x, top - height, width, height);

    let inner_x = x + CARD_PADDING;
    let inner_width = width - 2.0 * CARD_PADDING;
    let mut line_y = top - CARD_PADDING - LINE_HEIGHT * 0.8;

    writer.set_fill(muted());
    writer.bold_text(&title.to_uppercase(), 7.5, inner_x, line_y);
    line_y -= LINE_HEIGHT;

    writer.set_fill(ink());
    writer.bold_text(&party.name, BODY_FONT_SIZE, inner_x, line_y);
    line_y -= LINE_HEIGHT;

    for line in wrap_text(&party.address, inner_width, BODY_FONT_SIZE) {
        writer.text(&line, BODY_FONT_SIZE, inner_x, line_y);
        line_y -= LINE_HEIGHT;
    }

    let labelled = [
        ("GSTIN", party.gstin.as_deref()),
        ("PAN", party.pan.as_deref()),
        ("Email", party.email.as_deref()),
        ("Phone", party.phone.as_deref()),
    ];
    for (label, value) in labelled {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            writer.text(&format!("{label}: {value}"), BODY_FONT_SIZE, inner_x, line_y);
            line_y -= LINE_HEIGHT;
        }
    }

    height
}

fn draw_metadata(writer: &mut PageWriter, invoice: &InvoiceDocument) {
    let mut entries: Vec<(&str, String)> = Vec::new();
    if let Some(status) = invoice.status.as_deref() {
        entries.push(("Status", status.to_string()));
    }
    if let Some(date) = invoice.issue_date {
        entries.push(("Issue Date", date.format("%d %b %Y").to_string()));
    }
    if let Some(date) = invoice.due_date {
        entries.push(("Due Date", date.format("%d %b %Y").to_string()));
    }
    if entries.is_empty() {
        return;
    }

    writer.ensure_room(2.0 * LINE_HEIGHT + 4.0);
    let slot = CONTENT_WIDTH / entries.len() as f32;
    let label_y = writer.y;
    let value_y = writer.y - LINE_HEIGHT;
    for (i, (label, value)) in entries.iter().enumerate() {
        let x = MARGIN + slot * i as f32;
        writer.set_fill(muted());
        writer.bold_text(&label.to_uppercase(), 7.0, x, label_y);
        writer.set_fill(ink());
        writer.text(value, BODY_FONT_SIZE, x, value_y);
    }
    writer.y = value_y - LINE_HEIGHT - 4.0;
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{quantity:.0}")
    } else {
        format!("{quantity}")
    }
}

fn format_money(value: f64) -> String {
    format!("{value:.2}")
}

fn draw_table_header(writer: &mut PageWriter, columns: &TableColumns, has_tax: bool) {
    let top = writer.y;
    writer.filled_rect(MARGIN, top - TABLE_HEADER_HEIGHT, CONTENT_WIDTH, TABLE_HEADER_HEIGHT, band());
    writer.set_fill(paper());

    let text_y = top - TABLE_HEADER_HEIGHT + 2.2;
    let mut x = MARGIN + TABLE_ROW_PADDING;
    writer.bold_text("#", BODY_FONT_SIZE, x, text_y);
    x = MARGIN + columns.index + TABLE_ROW_PADDING;
    writer.bold_text("Description", BODY_FONT_SIZE, x, text_y);
    x = MARGIN + columns.index + columns.description;
    writer.text_right("Qty", BODY_FONT_SIZE, x + columns.quantity - TABLE_ROW_PADDING, text_y, true);
    x += columns.quantity;
    writer.text_right("Rate", BODY_FONT_SIZE, x + columns.rate - TABLE_ROW_PADDING, text_y, true);
    x += columns.rate;
    if has_tax {
        writer.text_right("Tax", BODY_FONT_SIZE, x + columns.tax - TABLE_ROW_PADDING, text_y, true);
        x += columns.tax;
    }
    writer.text_right("Amount", BODY_FONT_SIZE, x + columns.amount - TABLE_ROW_PADDING, text_y, true);

    writer.y = top - TABLE_HEADER_HEIGHT;
}

fn draw_item_row(
    writer: &mut PageWriter,
    columns: &TableColumns,
    has_tax: bool,
    index: usize,
    item: &LineItem,
) {
    let description_width = columns.description - 2.0 * TABLE_ROW_PADDING;
    let lines = wrap_text(&item.description, description_width, BODY_FONT_SIZE);
    let line_count = lines.len().max(1) as f32;
    let row_height = line_count * LINE_HEIGHT + 2.0 * TABLE_ROW_PADDING;

    if writer.y - row_height < FOOTER_RESERVE {
        writer.new_page();
        draw_table_header(writer, columns, has_tax);
    }

    let top = writer.y;
    let first_line_y = top - TABLE_ROW_PADDING - LINE_HEIGHT * 0.8;

    writer.set_fill(ink());
    writer.text(&format!("{}", index + 1), BODY_FONT_SIZE, MARGIN + TABLE_ROW_PADDING, first_line_y);

    let mut line_y = first_line_y;
    for line in &lines {
        writer.text(line, BODY_FONT_SIZE, MARGIN + columns.index + TABLE_ROW_PADDING, line_y);
        line_y -= LINE_HEIGHT;
    }

    let mut x = MARGIN + columns.index + columns.description;
    writer.text_right(
        &format_quantity(item.quantity),
        BODY_FONT_SIZE,
        x + columns.quantity - TABLE_ROW_PADDING,
        first_line_y,
        false,
    );
    x += columns.quantity;
    writer.text_right(
        &format_money(item.unit_price),
        BODY_FONT_SIZE,
        x + columns.rate - TABLE_ROW_PADDING,
        first_line_y,
        false,
    );
    x += columns.rate;
    if has_tax {
        writer.text_right(
            &format_money(item.tax_amount.unwrap_or(0.0)),
            BODY_FONT_SIZE,
            x + columns.tax - TABLE_ROW_PADDING,
            first_line_y,
            false,
        );
        x += columns.tax;
    }
    writer.text_right(
        &format_money(item.amount()),
        BODY_FONT_SIZE,
        x + columns.amount - TABLE_ROW_PADDING,
        first_line_y,
        false,
    );

    writer.y = top - row_height;
    writer.hline(MARGIN, MARGIN + CONTENT_WIDTH, writer.y, hairline(), 0.3);
}

fn draw_items_table(writer: &mut PageWriter, invoice: &InvoiceDocument) {
    if invoice.items.is_empty() {
        writer.ensure_room(2.0 * LINE_HEIGHT);
        writer.set_fill(muted());
        writer.text("No items linked to this invoice.", BODY_FONT_SIZE, MARGIN, writer.y - LINE_HEIGHT);
        writer.y -= 2.0 * LINE_HEIGHT + 4.0;
        return;
    }

    let has_tax = invoice.has_itemized_tax();
    let columns = table_columns(CONTENT_WIDTH, has_tax);
    let descriptions: Vec<&str> = invoice.items.iter().map(|i| i.description.as_str()).collect();
    let estimated = estimate_table_height(&descriptions, columns.description - 2.0 * TABLE_ROW_PADDING);

    // Start the table on a fresh page when it clearly cannot fit here; rows
    // that still overflow break page-by-page below.
    if writer.y - estimated < FOOTER_RESERVE && writer.y < PAGE_HEIGHT - MARGIN {
        writer.new_page();
    }

    draw_table_header(writer, &columns, has_tax);
    for (index, item) in invoice.items.iter().enumerate() {
        draw_item_row(writer, &columns, has_tax, index, item);
    }
    writer.y -= 4.0;
}

fn draw_totals(writer: &mut PageWriter, invoice: &InvoiceDocument) {
    let currency = invoice.currency_code().to_string();
    let subtotal = invoice.computed_subtotal();
    let tax = invoice.computed_tax();
    let total = invoice.computed_total();

    let words = format!(
        "Total in Words: {}",
        amount_in_words(total, &currency)
    );
    let word_lines = wrap_text(&words, CONTENT_WIDTH, BODY_FONT_SIZE);
    let needed = 4.0 * LINE_HEIGHT + word_lines.len() as f32 * LINE_HEIGHT + 8.0;
    writer.ensure_room(needed);

    let right = MARGIN + CONTENT_WIDTH;
    let label_x = right - TOTALS_WIDTH;
    let mut line_y = writer.y;

    let tax_label = match (invoice.has_itemized_tax(), invoice.tax_rate) {
        (false, Some(rate)) => format!("Tax ({rate}%)"),
        _ => "Tax".to_string(),
    };

    writer.set_fill(ink());
    writer.text(&format!("Subtotal ({currency})"), BODY_FONT_SIZE, label_x, line_y);
    writer.text_right(&format_money(subtotal), BODY_FONT_SIZE, right, line_y, false);
    line_y -= LINE_HEIGHT;

    writer.text(&format!("{tax_label} ({currency})"), BODY_FONT_SIZE, label_x, line_y);
    writer.text_right(&format_money(tax), BODY_FONT_SIZE, right, line_y, false);
    line_y -= LINE_HEIGHT * 0.6;
    writer.hline(label_x, right, line_y, hairline(), 0.4);
    line_y -= LINE_HEIGHT;

    writer.bold_text(&format!("Total ({currency})"), 10.0, label_x, line_y);
    writer.text_right(&format_money(total), 10.0, right, line_y, true);
    line_y -= 2.0 * LINE_HEIGHT;

    writer.set_fill(ink());
    for line in &word_lines {
        writer.text(line, BODY_FONT_SIZE, MARGIN, line_y);
        line_y -= LINE_HEIGHT;
    }
    writer.y = line_y - 4.0;
}

fn draw_payment_summary(writer: &mut PageWriter, invoice: &InvoiceDocument) {
    if invoice.payments.is_empty() {
        return;
    }
    let currency = invoice.currency_code().to_string();
    writer.ensure_room(3.0 * LINE_HEIGHT + 4.0);

    let right = MARGIN + CONTENT_WIDTH;
    let label_x = right - TOTALS_WIDTH;
    let mut line_y = writer.y;

    writer.set_fill(ink());
    writer.text(&format!("Amount Paid ({currency})"), BODY_FONT_SIZE, label_x, line_y);
    writer.text_right(&format_money(invoice.amount_paid()), BODY_FONT_SIZE, right, line_y, false);
    line_y -= LINE_HEIGHT;

    writer.bold_text(&format!("Balance Due ({currency})"), BODY_FONT_SIZE, label_x, line_y);
    writer.text_right(&format_money(invoice.balance_due()), BODY_FONT_SIZE, right, line_y, true);
    writer.y = line_y - 2.0 * LINE_HEIGHT;
}

fn draw_text_block(writer: &mut PageWriter, heading: &str, body: Option<&str>) {
    let Some(body) = body.map(str::trim).filter(|b| !b.is_empty()) else {
        return;
    };
    let lines = wrap_text(body, CONTENT_WIDTH, BODY_FONT_SIZE);
    writer.ensure_room((lines.len() as f32 + 2.0) * LINE_HEIGHT);

    let mut line_y = writer.y;
    writer.set_fill(muted());
    writer.bold_text(&heading.to_uppercase(), 7.5, MARGIN, line_y);
    line_y -= LINE_HEIGHT;

    writer.set_fill(ink());
    for line in &lines {
        writer.text(line, BODY_FONT_SIZE, MARGIN, line_y);
        line_y -= LINE_HEIGHT;
    }
    writer.y = line_y - 4.0;
}

fn draw_footers(
    writer: &PageWriter,
    invoice: &InvoiceDocument,
    logo: Option<&image_crate::DynamicImage>,
) {
    let branding = &invoice.branding;
    let total_pages = writer.pages.len();

    for (page_number, &(page, layer)) in writer.pages.iter().enumerate() {
        let layer = writer.doc.get_page(page).get_layer(layer);

        layer.set_outline_color(hairline());
        layer.set_outline_thickness(0.4);
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN), Mm(16.0)), false),
                (Point::new(Mm(MARGIN + CONTENT_WIDTH), Mm(16.0)), false),
            ],
            is_closed: false,
        });

        let mut text_x = MARGIN;
        if let Some(logo) = logo {
            let natural_height_mm = logo.height() as f32 * 25.4 / LOGO_DPI;
            let scale = LOGO_HEIGHT / natural_height_mm;
            let logo_width_mm = logo.width() as f32 * 25.4 / LOGO_DPI * scale;
            let image = printpdf::Image::from_dynamic_image(logo);
            image.add_to_layer(
                layer.clone(),
                printpdf::ImageTransform {
                    translate_x: Some(Mm(MARGIN)),
                    translate_y: Some(Mm(6.0)),
                    scale_x: Some(scale),
                    scale_y: Some(scale),
                    dpi: Some(LOGO_DPI),
                    ..Default::default()
                },
            );
            text_x += logo_width_mm + 3.0;
        }

        layer.set_fill_color(muted());
        layer.use_text(&branding.text, 8.0, Mm(text_x), Mm(8.5), &writer.regular);

        if let Some(link) = branding.link_url.as_deref() {
            let link_width = text_width(&branding.text, 8.0).max(LOGO_HEIGHT);
            layer.add_link_annotation(LinkAnnotation::new(
                Rect::new(Mm(MARGIN), Mm(5.0), Mm(text_x + link_width), Mm(14.0)),
                None,
                None,
                Actions::uri(link.to_string()),
                Some(HighlightingMode::Invert),
            ));
        }

        let page_label = format!("Page {} of {}", page_number + 1, total_pages);
        let x = MARGIN + CONTENT_WIDTH - text_width(&page_label, 8.0);
        layer.use_text(&page_label, 8.0, Mm(x), Mm(8.5), &writer.regular);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::models::{FooterBranding, PaymentRecord};
    use chrono::NaiveDate;

    fn sample_invoice(items: usize) -> InvoiceDocument {
        InvoiceDocument {
            number: Some("INV-0042".to_string()),
            status: Some("Sent".to_string()),
            issue_date: NaiveDate::from_ymd_opt(2026, 8, 1),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 15),
            currency: Some("INR".to_string()),
            billed_by: Party {
                name: "Studio North".to_string(),
                address: "Fourth Floor, Plot 12, Industrial Estate, Mumbai 400093".to_string(),
                gstin: Some("27AAPFU0939F1ZV".to_string()),
                pan: Some("AAPFU0939F".to_string()),
                email: Some("billing@studionorth.in".to_string()),
                phone: None,
            },
            billed_to: Party {
                name: "Acme Traders".to_string(),
                address: "8 Market Lane, Pune 411001".to_string(),
                ..Party::default()
            },
            items: (0..items)
                .map(|i| LineItem {
                    description: format!("Deliverable {} with review cycle", i + 1),
                    quantity: 1.0,
                    unit_price: 250.0,
                    tax_amount: None,
                })
                .collect(),
            subtotal: None,
            tax_rate: Some(18.0),
            total: None,
            notes: Some("Payable within 15 days of the issue date.".to_string()),
            terms: Some("Late payments accrue 1.5% interest per month.".to_string()),
            payments: vec![PaymentRecord {
                amount: 100.0,
                date: NaiveDate::from_ymd_opt(2026, 8, 5),
                method: Some("Bank transfer".to_string()),
            }],
            branding: FooterBranding {
                logo_url: None,
                text: "Powered by AgencyDesk".to_string(),
                link_url: Some("https://agencydesk.example".to_string()),
            },
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let generated = render(&sample_invoice(3), None).unwrap();
        assert!(generated.pdf.starts_with(b"%PDF"));
        assert!(generated.pdf.len() > 1000);
        assert_eq!(generated.filename, "Invoice_INV-0042.pdf");
    }

    #[test]
    fn test_render_without_items_still_completes() {
        let generated = render(&sample_invoice(0), None).unwrap();
        assert!(generated.pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_many_items_paginates() {
        let short = render(&sample_invoice(2), None).unwrap();
        let long = render(&sample_invoice(60), None).unwrap();
        assert!(long.pdf.len() > short.pdf.len());
    }

    #[test]
    fn test_render_swallows_undecodable_logo() {
        let generated = render(&sample_invoice(1), Some(b"not an image")).unwrap();
        assert!(generated.pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_without_number_uses_default_name() {
        let mut invoice = sample_invoice(1);
        invoice.number = None;
        let generated = render(&invoice, None).unwrap();
        assert_eq!(generated.filename, "Invoice.pdf");
    }

    #[test]
    fn test_quantity_formatting() {
        assert_eq!(format_quantity(3.0), "3");
        assert_eq!(format_quantity(2.5), "2.5");
    }
}
