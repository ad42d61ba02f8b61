//! Layout pass.
//!
//! Walks a [`Document`] top to bottom and produces the [`PageScript`] the
//! PDF backend draws. Every coordinate decision lives here: the letterhead,
//! the customer block, the items table with its page breaks, totals,
//! payment box, closing and footer. The backend translates the finished
//! script into content streams and nothing else, so the split keeps
//! pagination testable without parsing PDF bytes.
//!
//! Coordinates are PostScript points with the origin at the lower-left
//! corner of the page; `y` positions are text baselines.

pub mod script;

pub use script::{Color, DrawOp, Page, PageScript, Rect, Rule, Stroke, TextRun};

use std::mem;

use crate::core::{CompanyProfile, Document, DocumentKind};
use crate::font::FontId;
use crate::font::metrics::text_width;
use crate::format::{format_currency, format_date_long, format_plain};

/// A4 portrait width in points.
pub const PAGE_WIDTH: f32 = 595.28;
/// A4 portrait height in points.
pub const PAGE_HEIGHT: f32 = 841.89;
/// Uniform page margin.
pub const MARGIN: f32 = 40.0;
/// Height of one items-table row (header and data rows alike).
pub const ROW_HEIGHT: f32 = 20.0;

const LEFT: f32 = MARGIN;
const RIGHT: f32 = PAGE_WIDTH - MARGIN;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
const TOP: f32 = PAGE_HEIGHT - MARGIN;

// Table rows break to a new page once the cursor would cross this floor.
const TABLE_FLOOR: f32 = MARGIN + 100.0;
const TOTALS_WIDTH: f32 = 345.0;
const FOOTER_RULE_Y: f32 = 160.0;
// Non-table blocks keep clear of the footer region.
const BODY_FLOOR: f32 = FOOTER_RULE_Y + 20.0;

// Items-table columns. Qty, unit price and line total are right-aligned
// at their x; position and description are left-aligned.
const COL_POS: f32 = LEFT + 5.0;
const COL_DESC: f32 = LEFT + 45.0;
const COL_QTY: f32 = RIGHT - 150.0;
const COL_UNIT: f32 = RIGHT - 80.0;
const DESC_MAX_WIDTH: f32 = COL_QTY - COL_DESC - 15.0;

const INK: Color = Color::rgb(0.067, 0.094, 0.153);
const BODY: Color = Color::rgb(0.216, 0.255, 0.318);
const MUTED: Color = Color::rgb(0.420, 0.447, 0.502);
const FAINT: Color = Color::rgb(0.612, 0.639, 0.686);
const TABLE_BORDER: Color = Color::rgb(0.820, 0.835, 0.859);
const HEADER_FILL: Color = Color::rgb(0.953, 0.957, 0.965);
const BOX_FILL: Color = Color::rgb(0.976, 0.980, 0.984);
const HAIRLINE: Color = Color::rgb(0.898, 0.906, 0.922);

/// Lay out `document` as a paginated page script. Pure and deterministic:
/// the same inputs always produce the identical script.
pub fn layout(document: &Document, profile: &CompanyProfile) -> PageScript {
    LayoutPass::new(document, profile).run()
}

fn join_nonempty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}

struct LayoutPass<'a> {
    document: &'a Document,
    profile: &'a CompanyProfile,
    pages: Vec<Page>,
    ops: Vec<DrawOp>,
    y: f32,
}

impl<'a> LayoutPass<'a> {
    fn new(document: &'a Document, profile: &'a CompanyProfile) -> Self {
        Self {
            document,
            profile,
            pages: Vec::new(),
            ops: Vec::new(),
            y: TOP,
        }
    }

    fn run(mut self) -> PageScript {
        self.letterhead();
        self.customer_and_title();
        self.greeting();
        self.items_table();
        self.totals();
        self.payment_box();
        self.closing();
        self.footer();
        self.pages.push(Page { ops: self.ops });
        PageScript {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            pages: self.pages,
        }
    }

    // --- Primitives ---

    /// Left-aligned text run. Empty strings are dropped so absent profile
    /// fields leave no trace in the script.
    fn text(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        font: FontId,
        color: Color,
        text: impl Into<String>,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text(TextRun {
            x,
            y,
            size,
            font,
            color,
            text,
            max_width: None,
        }));
    }

    /// Text run with its right edge at `right`.
    fn text_right(
        &mut self,
        right: f32,
        y: f32,
        size: f32,
        font: FontId,
        color: Color,
        text: impl Into<String>,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        let x = right - text_width(&text, font, size);
        self.ops.push(DrawOp::Text(TextRun {
            x,
            y,
            size,
            font,
            color,
            text,
            max_width: None,
        }));
    }

    /// Text run centered on the page width.
    fn text_centered(
        &mut self,
        y: f32,
        size: f32,
        font: FontId,
        color: Color,
        text: impl Into<String>,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        let x = (PAGE_WIDTH - text_width(&text, font, size)) / 2.0;
        self.ops.push(DrawOp::Text(TextRun {
            x,
            y,
            size,
            font,
            color,
            text,
            max_width: None,
        }));
    }

    /// Left-aligned text clipped to `max_width`. The text itself stays
    /// intact; overlong descriptions are cut by the clip path, not sliced.
    fn text_clipped(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        font: FontId,
        color: Color,
        text: impl Into<String>,
        max_width: f32,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp::Text(TextRun {
            x,
            y,
            size,
            font,
            color,
            text,
            max_width: Some(max_width),
        }));
    }

    /// Horizontal rule from `x1` to `x2` at height `y`.
    fn hline(&mut self, x1: f32, x2: f32, y: f32, thickness: f32, color: Color) {
        self.ops.push(DrawOp::Rule(Rule {
            x1,
            y1: y,
            x2,
            y2: y,
            thickness,
            color,
        }));
    }

    fn rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Rect(rect));
    }

    /// Close the current page and continue at the top of a fresh one.
    fn break_page(&mut self) {
        let ops = mem::take(&mut self.ops);
        self.pages.push(Page { ops });
        self.y = TOP;
    }

    /// Break the page unless `needed` points still fit above the footer
    /// region.
    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < BODY_FLOOR {
            self.break_page();
        }
    }

    // --- Sections ---

    /// Issuer letterhead: name, address block, right-aligned contact
    /// column, heavy rule underneath.
    fn letterhead(&mut self) {
        let profile = self.profile;

        self.text(LEFT, TOP, 18.0, FontId::Bold, INK, profile.name());

        let place = join_nonempty(&[profile.postal_code(), profile.city()], " ");
        self.text(LEFT, TOP - 20.0, 10.0, FontId::Regular, MUTED, profile.address());
        self.text(LEFT, TOP - 32.0, 10.0, FontId::Regular, MUTED, place);
        self.text(LEFT, TOP - 44.0, 10.0, FontId::Regular, MUTED, profile.country());
        let left_bottom = TOP - 44.0;

        // Contact lines keep fixed slots so the rule position does not
        // wander with partially filled profiles; the website line is the
        // exception and only claims a slot when present.
        let mut right_y = TOP;
        if !profile.phone().is_empty() {
            let line = format!("Tel: {}", profile.phone());
            self.text_right(RIGHT, right_y, 9.0, FontId::Regular, MUTED, line);
        }
        right_y -= 12.0;
        if !profile.email().is_empty() {
            let line = format!("E-Mail: {}", profile.email());
            self.text_right(RIGHT, right_y, 9.0, FontId::Regular, MUTED, line);
        }
        right_y -= 12.0;
        if !profile.website().is_empty() {
            let line = format!("Web: {}", profile.website());
            self.text_right(RIGHT, right_y, 9.0, FontId::Regular, MUTED, line);
            right_y -= 12.0;
        }
        if !profile.tax_id().is_empty() {
            let line = format!("USt-IdNr.: {}", profile.tax_id());
            self.text_right(RIGHT, right_y, 9.0, FontId::Regular, MUTED, line);
        }

        let rule_y = left_bottom.min(right_y) - 20.0;
        self.hline(LEFT, RIGHT, rule_y, 4.0, INK);
        self.y = rule_y - 30.0;
    }

    /// Customer block on the left, document title and meta rows on the
    /// right. Both sides hang from the same top edge; the body cursor
    /// continues below whichever reaches deeper.
    fn customer_and_title(&mut self) {
        let doc = self.document;
        let profile = self.profile;
        let section_top = self.y;
        let mut left_bottom = section_top;

        if let Some(customer) = &doc.customer {
            let address = profile.address();
            let place = join_nonempty(&[profile.postal_code(), profile.city()], " ");
            let sender = join_nonempty(&[profile.name(), &address, &place], " · ");
            self.text(LEFT, section_top, 8.0, FontId::Regular, FAINT, sender);

            self.rect(Rect {
                x: LEFT,
                y: section_top - 40.0,
                width: 4.0,
                height: 26.0,
                fill: Some(INK),
                stroke: None,
            });
            self.text(
                LEFT + 12.0,
                section_top - 22.0,
                10.0,
                FontId::Bold,
                INK,
                customer.name.clone(),
            );
            if let Some(email) = &customer.email {
                self.text(
                    LEFT + 12.0,
                    section_top - 36.0,
                    10.0,
                    FontId::Regular,
                    MUTED,
                    email.clone(),
                );
            }
            left_bottom = section_top - 45.0;
        }

        self.text_right(RIGHT, section_top, 24.0, FontId::Bold, INK, doc.kind.title());

        let number_label = match doc.kind {
            DocumentKind::Invoice => "Rechnungsnr.:",
            DocumentKind::Quote => "Angebotsnr.:",
        };
        self.meta_row(section_top - 30.0, number_label, &doc.number);
        self.meta_row(section_top - 44.0, "Datum:", &format_date_long(doc.issue_date));
        let mut right_bottom = section_top - 44.0;

        if doc.kind == DocumentKind::Invoice {
            if let Some(due) = doc.due_date {
                self.hline(RIGHT - 200.0, RIGHT, section_top - 58.0, 1.0, HAIRLINE);
                let line = format!("Fällig am: {}", format_date_long(due));
                self.text_right(RIGHT, section_top - 70.0, 10.0, FontId::Bold, INK, line);
                right_bottom = section_top - 70.0;
            }
        }

        self.y = left_bottom.min(right_bottom) - 15.0;
    }

    /// One right-aligned label/value row, value flush with the content
    /// edge and the label 8 pt to its left.
    fn meta_row(&mut self, y: f32, label: &str, value: &str) {
        let value_width = text_width(value, FontId::Bold, 10.0);
        self.text_right(
            RIGHT - value_width - 8.0,
            y,
            9.0,
            FontId::Regular,
            MUTED,
            label,
        );
        self.text(RIGHT - value_width, y, 10.0, FontId::Bold, INK, value);
    }

    fn greeting(&mut self) {
        self.ensure_space(35.0);
        let lead = match self.document.kind {
            DocumentKind::Invoice => {
                "hiermit stellen wir Ihnen folgende Leistungen in Rechnung:"
            }
            DocumentKind::Quote => "hiermit unterbreiten wir Ihnen folgendes Angebot:",
        };
        self.text(
            LEFT,
            self.y,
            10.0,
            FontId::Regular,
            BODY,
            "Sehr geehrte Damen und Herren,",
        );
        self.y -= 15.0;
        self.text(LEFT, self.y, 10.0, FontId::Regular, BODY, lead);
        self.y -= 20.0;
    }

    /// The items table. Breaks to a fresh page (repeating the header row)
    /// whenever the next row would cross the table floor.
    fn items_table(&mut self) {
        let doc = self.document;
        if doc.items.is_empty() {
            return;
        }

        self.table_header_row();
        for (index, item) in doc.items.iter().enumerate() {
            if self.y - ROW_HEIGHT < TABLE_FLOOR {
                self.break_page();
                self.table_header_row();
            }
            self.rect(Rect {
                x: LEFT,
                y: self.y - ROW_HEIGHT,
                width: CONTENT_WIDTH,
                height: ROW_HEIGHT,
                fill: None,
                stroke: Some(Stroke {
                    thickness: 1.0,
                    color: TABLE_BORDER,
                }),
            });
            let baseline = self.y - 14.0;
            self.text(
                COL_POS,
                baseline,
                11.0,
                FontId::Regular,
                MUTED,
                (index + 1).to_string(),
            );
            self.text_clipped(
                COL_DESC,
                baseline,
                11.0,
                FontId::Regular,
                INK,
                item.description.clone(),
                DESC_MAX_WIDTH,
            );
            self.text_right(
                COL_QTY,
                baseline,
                11.0,
                FontId::Regular,
                BODY,
                format_plain(item.quantity),
            );
            self.text_right(
                COL_UNIT,
                baseline,
                11.0,
                FontId::Regular,
                BODY,
                format_currency(item.unit_price, &doc.currency_code),
            );
            self.text_right(
                RIGHT,
                baseline,
                11.0,
                FontId::Bold,
                INK,
                format_currency(item.total(), &doc.currency_code),
            );
            self.y -= ROW_HEIGHT;
        }
        self.y -= 20.0;
    }

    fn table_header_row(&mut self) {
        self.rect(Rect {
            x: LEFT,
            y: self.y - ROW_HEIGHT,
            width: CONTENT_WIDTH,
            height: ROW_HEIGHT,
            fill: Some(HEADER_FILL),
            stroke: Some(Stroke {
                thickness: 2.0,
                color: INK,
            }),
        });
        let baseline = self.y - 14.0;
        self.text(COL_POS, baseline, 10.0, FontId::Bold, INK, "Pos.");
        self.text(COL_DESC, baseline, 10.0, FontId::Bold, INK, "Beschreibung");
        self.text_right(COL_QTY, baseline, 10.0, FontId::Bold, INK, "Menge");
        self.text_right(COL_UNIT, baseline, 10.0, FontId::Bold, INK, "Einzelpreis");
        self.text_right(RIGHT, baseline, 10.0, FontId::Bold, INK, "Gesamt");
        self.y -= ROW_HEIGHT;
    }

    /// Net, VAT and the boxed gross total, right-aligned in a fixed-width
    /// block. Always rendered, even for documents without items.
    fn totals(&mut self) {
        self.ensure_space(78.0);
        let doc = self.document;
        let code = doc.currency_code.as_str();
        let x = RIGHT - TOTALS_WIDTH;

        self.text(
            x,
            self.y,
            10.0,
            FontId::Regular,
            BODY,
            "Zwischensumme (Netto):",
        );
        self.text_right(
            RIGHT,
            self.y,
            10.0,
            FontId::Regular,
            INK,
            format_currency(doc.subtotal, code),
        );
        self.y -= 15.0;

        let vat_label = format!("zzgl. MwSt. ({}%):", format_plain(doc.tax_rate));
        self.text(x, self.y, 10.0, FontId::Regular, BODY, vat_label);
        self.text_right(
            RIGHT,
            self.y,
            10.0,
            FontId::Regular,
            INK,
            format_currency(doc.tax_amount, code),
        );
        self.y -= 10.0;

        self.hline(x, RIGHT, self.y, 1.0, HAIRLINE);
        self.y -= 8.0;

        self.rect(Rect {
            x: x - 10.0,
            y: self.y - 25.0,
            width: TOTALS_WIDTH + 10.0,
            height: 25.0,
            fill: Some(HEADER_FILL),
            stroke: Some(Stroke {
                thickness: 2.0,
                color: INK,
            }),
        });
        self.text(
            x,
            self.y - 16.0,
            11.0,
            FontId::Bold,
            INK,
            "Gesamtbetrag (Brutto):",
        );
        self.text_right(
            RIGHT - 5.0,
            self.y - 17.0,
            13.0,
            FontId::Bold,
            INK,
            format_currency(doc.total, code),
        );
        self.y -= 45.0;
    }

    /// Payment terms box. Invoices only; quotes carry no payment block.
    fn payment_box(&mut self) {
        let doc = self.document;
        if doc.kind != DocumentKind::Invoice {
            return;
        }
        self.ensure_space(80.0);
        let top = self.y;

        self.rect(Rect {
            x: LEFT,
            y: top - 60.0,
            width: CONTENT_WIDTH,
            height: 60.0,
            fill: Some(BOX_FILL),
            stroke: None,
        });
        self.rect(Rect {
            x: LEFT,
            y: top - 60.0,
            width: 4.0,
            height: 60.0,
            fill: Some(INK),
            stroke: None,
        });

        self.text(
            LEFT + 20.0,
            top - 15.0,
            10.0,
            FontId::Bold,
            INK,
            "Zahlungsinformationen",
        );
        self.text(
            LEFT + 20.0,
            top - 30.0,
            9.0,
            FontId::Regular,
            MUTED,
            "Zahlungsziel:",
        );
        let due = match doc.due_date {
            Some(date) => format_date_long(date),
            None => "Bei Erhalt".to_string(),
        };
        self.text(LEFT + 20.0, top - 42.0, 9.0, FontId::Bold, INK, due);
        self.text(
            LEFT + 260.0,
            top - 30.0,
            9.0,
            FontId::Regular,
            MUTED,
            "Zahlungsweise:",
        );
        self.text(LEFT + 260.0, top - 42.0, 9.0, FontId::Bold, INK, "Überweisung");
        self.text(
            LEFT + 20.0,
            top - 55.0,
            8.0,
            FontId::Regular,
            MUTED,
            "Bitte überweisen Sie den Betrag unter Angabe der Rechnungsnummer auf unser Konto.",
        );

        self.y = top - 80.0;
    }

    fn closing(&mut self) {
        self.ensure_space(50.0);
        let profile = self.profile;
        let thanks = match self.document.kind {
            DocumentKind::Invoice => {
                "Wir bedanken uns für Ihren Auftrag und das entgegengebrachte Vertrauen."
            }
            DocumentKind::Quote => {
                "Wir freuen uns auf Ihre Auftragserteilung und stehen für Rückfragen gerne zur Verfügung."
            }
        };
        self.text(LEFT, self.y, 10.0, FontId::Regular, BODY, thanks);
        self.y -= 15.0;
        self.text(
            LEFT,
            self.y,
            10.0,
            FontId::Regular,
            BODY,
            "Mit freundlichen Grüßen",
        );
        self.y -= 15.0;
        self.text(LEFT, self.y, 10.0, FontId::Bold, INK, profile.name());
        self.y -= 20.0;
    }

    /// Fixed footer on the final page: contact, bank and legal columns
    /// above two boilerplate lines. Drawn last, after all body content,
    /// so it can never collide with a table row.
    fn footer(&mut self) {
        if self.y < BODY_FLOOR {
            self.break_page();
        }
        let profile = self.profile;

        self.hline(LEFT, RIGHT, FOOTER_RULE_Y, 2.0, INK);

        let col2 = LEFT + 175.0;
        let col3 = LEFT + 350.0;
        let title_y = FOOTER_RULE_Y - 14.0;
        self.text(LEFT, title_y, 10.0, FontId::Bold, INK, "Kontakt");
        self.text(col2, title_y, 10.0, FontId::Bold, INK, "Bankverbindung");
        self.text(col3, title_y, 10.0, FontId::Bold, INK, "Rechtliches");

        let place = join_nonempty(&[profile.postal_code(), profile.city()], " ");
        let mut contact = vec![
            profile.name().to_string(),
            profile.address(),
            place,
            profile.country().to_string(),
        ];
        if !profile.phone().is_empty() {
            contact.push(format!("Tel: {}", profile.phone()));
        }
        if !profile.email().is_empty() {
            contact.push(format!("E-Mail: {}", profile.email()));
        }
        if !profile.website().is_empty() {
            contact.push(format!("Web: {}", profile.website()));
        }
        self.footer_column(LEFT, &contact);

        let mut bank = vec![profile.bank_name().to_string()];
        if !profile.iban().is_empty() {
            bank.push(format!("IBAN: {}", profile.iban()));
        }
        if !profile.bic().is_empty() {
            bank.push(format!("BIC: {}", profile.bic()));
        }
        self.footer_column(col2, &bank);

        let mut legal = Vec::new();
        if !profile.tax_id().is_empty() {
            legal.push(format!("USt-IdNr.: {}", profile.tax_id()));
        }
        self.footer_column(col3, &legal);

        self.text_centered(
            58.0,
            8.0,
            FontId::Regular,
            FAINT,
            "Alle Preise verstehen sich in Euro. Es gelten unsere Allgemeinen Geschäftsbedingungen.",
        );
        self.text_centered(
            47.0,
            8.0,
            FontId::Regular,
            FAINT,
            "Dieses Dokument wurde elektronisch erstellt und ist ohne Unterschrift gültig.",
        );
    }

    /// One footer column: 8 pt muted lines, empty entries packed out.
    fn footer_column(&mut self, x: f32, lines: &[String]) {
        let mut y = FOOTER_RULE_Y - 28.0;
        for line in lines.iter().filter(|line| !line.is_empty()) {
            self.text(x, y, 8.0, FontId::Regular, MUTED, line.clone());
            y -= 10.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CompanyProfileBuilder, Customer, DocumentBuilder};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_profile() -> CompanyProfile {
        CompanyProfileBuilder::new("Muster GmbH")
            .address("Musterstraße 1")
            .postal_code("10115")
            .city("Berlin")
            .country("Deutschland")
            .vat_id("DE123456789")
            .email("info@muster.de")
            .phone("+49 30 123456")
            .iban("DE89 3704 0044 0532 0130 00")
            .bic("COBADEFFXXX")
            .bank_name("Commerzbank")
            .build()
    }

    fn sample_invoice() -> Document {
        DocumentBuilder::new(DocumentKind::Invoice, "RE-2024-001", date(2024, 6, 15))
            .due_date(date(2024, 7, 15))
            .customer(Customer::new("Beispiel AG").email("buchhaltung@beispiel.de"))
            .add_item("Beratung", dec!(2), dec!(19.99))
            .add_item("Entwicklung", dec!(10), dec!(150))
            .build_unchecked()
    }

    #[test]
    fn invoice_renders_title_and_number() {
        let script = layout(&sample_invoice(), &sample_profile());
        assert_eq!(script.page_count(), 1);
        assert!(script.contains_text("RECHNUNG"));
        assert!(script.contains_text("Rechnungsnr.:"));
        assert!(script.contains_text("RE-2024-001"));
        assert!(!script.contains_text("ANGEBOT"));
    }

    #[test]
    fn quote_uses_quote_wording() {
        let mut doc = sample_invoice();
        doc.kind = DocumentKind::Quote;
        doc.due_date = Some(date(2024, 7, 15));
        let script = layout(&doc, &sample_profile());
        assert!(script.contains_text("ANGEBOT"));
        assert!(script.contains_text("Angebotsnr.:"));
        assert!(script.contains_text("hiermit unterbreiten wir Ihnen folgendes Angebot:"));
        // A due date on a quote is ignored, as is the payment block.
        assert!(!script.contains_text("Fällig am:"));
        assert!(!script.contains_text("Zahlungsinformationen"));
    }

    #[test]
    fn letterhead_rule_sits_below_both_columns() {
        let script = layout(&sample_invoice(), &sample_profile());
        let heavy: Vec<_> = script.pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rule(rule) if rule.thickness == 4.0 => Some(rule),
                _ => None,
            })
            .collect();
        assert_eq!(heavy.len(), 1);
        assert_eq!(heavy[0].y1, TOP - 44.0 - 20.0);
        assert_eq!(heavy[0].x1, LEFT);
        assert_eq!(heavy[0].x2, RIGHT);
    }

    #[test]
    fn line_totals_are_formatted_per_row() {
        let script = layout(&sample_invoice(), &sample_profile());
        assert!(script.contains_text("39,98 €"));
        assert!(script.contains_text("1.500,00 €"));
    }

    #[test]
    fn description_is_clipped_not_sliced() {
        let long = "Sehr ausführliche Beschreibung einer Leistung, die deutlich \
                    breiter ist als die Beschreibungsspalte des Dokuments";
        let doc = DocumentBuilder::new(DocumentKind::Invoice, "RE-1", date(2024, 1, 2))
            .add_item(long, dec!(1), dec!(10))
            .build_unchecked();
        let script = layout(&doc, &sample_profile());
        let run = script
            .text_runs()
            .find(|run| run.text == long)
            .expect("description run present in full");
        assert_eq!(run.max_width, Some(DESC_MAX_WIDTH));
    }

    #[test]
    fn no_items_drops_table_but_keeps_totals() {
        let doc = DocumentBuilder::new(DocumentKind::Quote, "AN-7", date(2024, 3, 1))
            .build_unchecked();
        let script = layout(&doc, &sample_profile());
        assert_eq!(script.page_count(), 1);
        assert!(!script.contains_text("Beschreibung"));
        assert!(script.contains_text("Gesamtbetrag (Brutto):"));
        assert!(script.contains_text("0,00 €"));
    }

    #[test]
    fn missing_customer_omits_recipient_block() {
        let mut doc = sample_invoice();
        doc.customer = None;
        let script = layout(&doc, &sample_profile());
        assert!(!script.contains_text("Beispiel AG"));
        assert!(script.contains_text("RECHNUNG"));
    }

    #[test]
    fn sender_line_skips_missing_parts() {
        assert_eq!(
            join_nonempty(&["Muster GmbH", "", "10115 Berlin"], " · "),
            "Muster GmbH · 10115 Berlin"
        );
        assert_eq!(join_nonempty(&["", ""], " · "), "");
    }

    #[test]
    fn invoice_without_due_date_shows_bei_erhalt() {
        let mut doc = sample_invoice();
        doc.due_date = None;
        let script = layout(&doc, &sample_profile());
        assert!(!script.contains_text("Fällig am:"));
        assert!(script.contains_text("Bei Erhalt"));
    }

    #[test]
    fn long_item_list_paginates_and_repeats_header() {
        let mut builder = DocumentBuilder::new(DocumentKind::Invoice, "RE-60", date(2024, 5, 1));
        for i in 0..60 {
            builder = builder.add_item(format!("Position {i}"), dec!(1), dec!(10));
        }
        let doc = builder.build_unchecked();
        let script = layout(&doc, &sample_profile());
        assert!(script.page_count() > 1);
        for page in &script.pages[..script.pages.len() - 1] {
            assert!(page.contains_text("Beschreibung"));
        }
        // No row crosses the table floor.
        for page in &script.pages {
            for run in page.text_runs() {
                if run.text.starts_with("Position ") {
                    assert!(run.y > MARGIN + 100.0 - ROW_HEIGHT);
                }
            }
        }
    }

    #[test]
    fn footer_only_on_last_page() {
        let mut builder = DocumentBuilder::new(DocumentKind::Invoice, "RE-61", date(2024, 5, 1));
        for i in 0..60 {
            builder = builder.add_item(format!("Position {i}"), dec!(1), dec!(10));
        }
        let doc = builder.build_unchecked();
        let script = layout(&doc, &sample_profile());
        let last = script.page_count() - 1;
        for (index, page) in script.pages.iter().enumerate() {
            assert_eq!(page.contains_text("Bankverbindung"), index == last);
        }
    }

    #[test]
    fn empty_profile_still_produces_a_page() {
        let script = layout(&sample_invoice(), &CompanyProfile::default());
        assert_eq!(script.page_count(), 1);
        assert!(script.contains_text("RECHNUNG"));
        // No orphaned labels for absent profile data.
        assert!(!script.contains_text("IBAN:"));
        assert!(!script.contains_text("Tel:"));
    }
}
