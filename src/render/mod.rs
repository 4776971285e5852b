//! Paystub rendering.
//!
//! Rendering is split in two steps. [`render_document`] turns a record and
//! its calculation into a [`PaystubDocument`] of formatted strings;
//! [`render_html`] lays that document out for a [`Surface`]. The preview and
//! the PDF export go through the same document, so their content is always
//! identical.

mod currency;
mod dates;
mod document;
mod html;

pub use currency::{format_currency, format_quantity};
pub use dates::format_date;
pub use document::{
    render_document, render_document_with, Branding, DocumentHeader, PaystubDocument,
    SectionTable, TableRow, FIELD_PLACEHOLDER, PAY_PERIOD_UNSPECIFIED, SSN_PLACEHOLDER,
};
pub use html::{escape_html, render_html, Surface};
