//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Footnotes
/// - Task lists
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.footnotes = true;
    options.extension.tasklist = true;

    let html_output = render(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_code() {
        let html = markdown_to_html("# Hooks\n\n```tsx\nconst [a, setA] = useState(0)\n```\n");
        assert!(html.contains("<h1>Hooks</h1>"));
        assert!(html.contains("<pre>"));
        assert!(html.contains("useState(0)"));
    }

    #[test]
    fn test_renders_tables() {
        let html = markdown_to_html("| Hook | Use |\n|---|---|\n| useRef | DOM |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>useRef</td>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("hello <script>alert(1)</script> <a href=\"javascript:x()\">x</a>");
        assert!(!html.contains("<script"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("hello"));
    }
}
