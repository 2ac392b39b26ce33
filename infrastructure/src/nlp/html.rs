//! HTML to plain text for document uploads

use scraper::{ElementRef, Html, Node};

/// Subtrees never rendered as text
const SKIPPED: &[&str] = &["script", "style", "noscript", "svg", "head", "template"];

/// Elements that end a line, so sentence splitting sees paragraph breaks
const BLOCKS: &[&str] = &[
    "p", "div", "br", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "blockquote", "pre", "title",
];

/// Visible text of an HTML document, one line per block element
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut out = String::new();
    walk(document.root_element(), &mut out);

    out.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn walk(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIPPED.contains(&name) {
        return;
    }
    let block = BLOCKS.contains(&name);
    if block {
        out.push('\n');
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(text);
                out.push(' ');
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    walk(child, out);
                }
            }
            _ => {}
        }
    }

    if block {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_become_lines() {
        let html = "<html><body><h1>Report</h1><p>Ada   met <b>Alan</b>.</p><ul><li>one</li><li>two</li></ul></body></html>";
        assert_eq!(html_to_text(html), "Report\nAda met Alan .\none\ntwo");
    }

    #[test]
    fn test_scripts_and_head_are_dropped() {
        let html = r#"
        <html><head><title>T</title><style>.x{}</style></head><body>
            <script>var x = 1;</script>
            <p>Visible text</p>
            <noscript>No JS</noscript>
        </body></html>
        "#;
        assert_eq!(html_to_text(html), "Visible text");
    }

    #[test]
    fn test_empty_document() {
        assert!(html_to_text("").is_empty());
    }
}
