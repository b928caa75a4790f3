mod html_formatter;
mod markdown_formatter;
mod text_formatter;

pub use html_formatter::HtmlFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use text_formatter::TextFormatter;
