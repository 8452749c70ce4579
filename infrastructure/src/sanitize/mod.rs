//! Text sanitization: implements the
//! [`TextSanitizer`](carcino_application::TextSanitizer) port.

mod html;

pub use html::HtmlSanitizer;
