//! HTML layout of a [`PaystubDocument`].
//!
//! Both surfaces share the same body markup; only the outer container
//! differs. All user-entered text is escaped.

use std::fmt::{self, Write};

use super::document::{PaystubDocument, SectionTable};

/// Where the markup will be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// On-screen letter-sized card with half-inch padding.
    Preview,
    /// Off-screen 8.5in container captured for PDF export.
    Export,
}

impl Surface {
    fn container_style(self) -> &'static str {
        match self {
            Surface::Preview => {
                "width: 8.5in; min-height: 11in; background-color: white; padding: 0.5in; box-sizing: border-box;"
            }
            Surface::Export => {
                "width: 8.5in; background-color: white; padding: 0.3in; font-family: Arial, sans-serif; font-size: 10px; line-height: 1.2; box-sizing: border-box;"
            }
        }
    }
}

const CELL: &str = "padding: 3px;";
const HEAD_CELL: &str = "padding: 3px; font-weight: 600; background-color: #f9fafb;";
const ROW_RULE: &str = "border-bottom: 1px solid #e5e7eb;";

/// Lays the document out as a self-contained HTML fragment.
///
/// # Example
///
/// ```
/// use paystub_engine::calculation::calculate_totals;
/// use paystub_engine::models::PaystubRecord;
/// use paystub_engine::render::{render_document, render_html, Surface};
///
/// let record = PaystubRecord::default();
/// let doc = render_document(&record, &calculate_totals(&record));
/// let html = render_html(&doc, Surface::Export);
///
/// assert!(html.contains("TOTAL PAYMENT:"));
/// ```
pub fn render_html(document: &PaystubDocument, surface: Surface) -> String {
    HtmlPage { document, surface }.to_string()
}

/// A document laid out for one surface, written on demand.
struct HtmlPage<'a> {
    document: &'a PaystubDocument,
    surface: Surface,
}

impl fmt::Display for HtmlPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_document(f, self.document, self.surface)
    }
}

fn write_document(out: &mut impl Write, doc: &PaystubDocument, surface: Surface) -> fmt::Result {
    writeln!(out, r#"<div class="paystub" style="{}">"#, surface.container_style())?;
    writeln!(
        out,
        r#"<div style="max-width: 100%; margin: 0 auto; font-size: 10px; line-height: 1.2;">"#
    )?;

    let header = &doc.header;
    writeln!(
        out,
        r#"<div style="border-bottom: 2px solid #000; padding-bottom: 8px; margin-bottom: 12px;">"#
    )?;
    writeln!(
        out,
        r#"<div style="text-align: center; margin-bottom: 8px;"><div style="width: 300px; height: 80px; margin: 0 auto 8px; display: flex; align-items: center; justify-content: center;"><img src="{}" alt="{}" style="max-width: 100%; max-height: 100%; object-fit: contain;" /></div></div>"#,
        escape_html(&header.branding.logo_path),
        escape_html(&header.branding.name)
    )?;
    writeln!(
        out,
        r#"<div style="display: grid; grid-template-columns: 1fr 1fr; gap: 12px; font-size: 9px;">"#
    )?;
    writeln!(out, "<div>")?;
    write_field(out, "Name:", &header.name)?;
    write_field(out, "Address:", &header.address)?;
    write_field(out, "SSN (Last 4):", &header.ssn)?;
    writeln!(out, "</div>")?;
    writeln!(out, r#"<div style="text-align: right;">"#)?;
    write_field(out, "Pay Period:", &header.pay_period)?;
    write_field(out, "Payment Date:", &header.payment_date)?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")?;

    for section in &doc.sections {
        write_section(out, section)?;
    }

    writeln!(
        out,
        r#"<div style="border-top: 2px solid #000; padding-top: 8px; margin-bottom: 12px;"><table style="width: 100%;"><tbody><tr style="font-weight: bold; font-size: 14px;"><td style="text-align: right; padding: 4px;">TOTAL PAYMENT:</td><td style="text-align: right; padding: 4px; width: 25%;">{}</td></tr></tbody></table></div>"#,
        escape_html(&doc.grand_total)
    )?;

    if let Some(lines) = &doc.notes {
        writeln!(
            out,
            r#"<div style="font-size: 8px; margin-top: 8px; border-top: 1px solid #d1d5db; padding-top: 8px;">"#
        )?;
        for line in lines {
            if line.is_empty() {
                writeln!(out, r#"<p style="margin: 2px 0;">&nbsp;</p>"#)?;
            } else {
                writeln!(out, r#"<p style="margin: 2px 0;">{}</p>"#, escape_html(line))?;
            }
        }
        writeln!(out, "</div>")?;
    }

    writeln!(out, "</div>")?;
    writeln!(out, "</div>")
}

fn write_field(out: &mut impl Write, label: &str, value: &str) -> fmt::Result {
    writeln!(
        out,
        r#"<p style="margin: 2px 0;"><strong>{}</strong> {}</p>"#,
        label,
        escape_html(value)
    )
}

fn write_section(out: &mut impl Write, section: &SectionTable) -> fmt::Result {
    writeln!(out, r#"<div style="margin-bottom: 12px;">"#)?;
    writeln!(
        out,
        r#"<h2 style="font-size: 11px; font-weight: bold; margin-bottom: 4px; border-bottom: 1px solid #d1d5db; padding-bottom: 2px;">{}</h2>"#,
        escape_html(section.title)
    )?;
    writeln!(
        out,
        r#"<table style="width: 100%; border-collapse: collapse; font-size: 9px;">"#
    )?;
    writeln!(
        out,
        r#"<thead><tr style="{ROW_RULE}"><th style="text-align: left; {HEAD_CELL}">{}</th><th style="text-align: center; {HEAD_CELL}">Qty</th><th style="text-align: center; {HEAD_CELL}">Rate</th><th style="text-align: right; {HEAD_CELL}">Amount</th></tr></thead>"#,
        escape_html(section.type_header)
    )?;
    writeln!(out, "<tbody>")?;
    for row in &section.rows {
        writeln!(
            out,
            r#"<tr style="{ROW_RULE}"><td style="{CELL}">{}</td><td style="text-align: center; {CELL}">{}</td><td style="text-align: center; {CELL}">{}</td><td style="text-align: right; {CELL}">{}</td></tr>"#,
            escape_html(&row.label),
            escape_html(&row.quantity),
            escape_html(&row.rate),
            escape_html(&row.amount)
        )?;
    }
    writeln!(
        out,
        r#"<tr style="font-weight: bold; background-color: #f9fafb;"><td colspan="3" style="text-align: right; {CELL}">{}</td><td style="text-align: right; {CELL}">{}</td></tr>"#,
        escape_html(section.subtotal_label),
        escape_html(&section.subtotal)
    )?;
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</div>")
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use in text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_totals;
    use crate::models::{CustomItem, PaystubRecord};
    use crate::render::document::render_document;

    fn render(record: &PaystubRecord, surface: Surface) -> String {
        render_html(&render_document(record, &calculate_totals(record)), surface)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_sections_appear_in_order() {
        let html = render(&PaystubRecord::default(), Surface::Preview);
        let routes = html.find("ROUTES COMPLETED").unwrap();
        let incentives = html.find("INCENTIVES &amp; BONUSES").unwrap();
        let stat = html.find("STAT DELIVERIES").unwrap();
        let total = html.find("TOTAL PAYMENT:").unwrap();
        assert!(routes < incentives && incentives < stat && stat < total);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut record = PaystubRecord::default();
        record.driver_info.first_name = "<script>".to_string();
        record
            .routes
            .add_custom_item(CustomItem::new("A & B", 1.0, 1.0));

        let html = render(&record, Surface::Export);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_surfaces_share_body_markup() {
        let record = PaystubRecord::default();
        let preview = render(&record, Surface::Preview);
        let export = render(&record, Surface::Export);
        assert_ne!(preview, export);

        let body = |html: &str| html.split_once('\n').map(|(_, rest)| rest.to_string());
        assert_eq!(body(&preview), body(&export));
    }

    #[test]
    fn test_blank_note_lines_keep_their_gap() {
        let mut record = PaystubRecord::default();
        record.notes = "one\n\ntwo".to_string();
        let html = render(&record, Surface::Export);
        assert!(html.contains(r#"<p style="margin: 2px 0;">&nbsp;</p>"#));
        assert!(html.contains(r#"<p style="margin: 2px 0;">two</p>"#));
    }

    /// Accepts `room` bytes, then refuses every write.
    struct Bounded {
        room: usize,
    }

    impl Write for Bounded {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.room = self.room.checked_sub(s.len()).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    #[test]
    fn test_writer_errors_are_propagated() {
        let record = PaystubRecord::default();
        let doc = render_document(&record, &calculate_totals(&record));

        let mut sink = Bounded { room: 64 };
        assert!(write_document(&mut sink, &doc, Surface::Export).is_err());

        let mut sink = Bounded { room: usize::MAX };
        assert!(write_document(&mut sink, &doc, Surface::Export).is_ok());
    }

    #[test]
    fn test_rendered_markup_is_complete() {
        for surface in [Surface::Preview, Surface::Export] {
            let html = render(&PaystubRecord::default(), surface);
            assert!(html.starts_with(r#"<div class="paystub""#));
            assert!(html.ends_with("</div>\n</div>\n"));
            assert_eq!(html.matches("<div").count(), html.matches("</div>").count());
        }
    }

    #[test]
    fn test_no_notes_block_without_notes() {
        let mut record = PaystubRecord::default();
        record.notes.clear();
        let html = render(&record, Surface::Export);
        assert!(!html.contains("font-size: 8px"));
    }
}
