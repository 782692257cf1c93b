//! Spending analysis formatting
//!
//! The summarizer answers with a small markdown subset: `### ` headings,
//! `* ` bullets and `**bold**` runs. Anything else is plain text.

use super::report::{BOLD, RESET};

/// Inline run of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

/// One line of the reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Vec<Span>),
    Bullet(Vec<Span>),
    Paragraph(Vec<Span>),
}

/// Split `**bold**` runs out of a line; an unmatched `**` stays literal
pub fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("**") {
        let after_open = &rest[open + 2..];
        let Some(len) = after_open.find("**") else {
            break;
        };

        if open > 0 {
            spans.push(Span::Plain(rest[..open].to_string()));
        }
        if len > 0 {
            spans.push(Span::Bold(after_open[..len].to_string()));
        }
        rest = &after_open[len + 2..];
    }

    if !rest.is_empty() {
        spans.push(Span::Plain(rest.to_string()));
    }
    spans
}

/// Parse a reply into blocks; blank lines are dropped
pub fn parse_markdown(text: &str) -> Vec<Block> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            if let Some(heading) = line.strip_prefix("### ") {
                Block::Heading(parse_spans(heading.trim()))
            } else if let Some(item) = line.trim_start().strip_prefix("* ") {
                Block::Bullet(parse_spans(item))
            } else {
                Block::Paragraph(parse_spans(line))
            }
        })
        .collect()
}

fn render_spans(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(text) => text.clone(),
            Span::Bold(text) => format!("{}{}{}", BOLD, text, RESET),
        })
        .collect()
}

/// Render blocks for the terminal, bolding headings and bold runs
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut output = String::new();
    for block in blocks {
        match block {
            Block::Heading(spans) => {
                output.push_str(&format!("\n{}{}{}\n", BOLD, render_spans(spans), RESET));
            }
            Block::Bullet(spans) => output.push_str(&format!("  • {}\n", render_spans(spans))),
            Block::Paragraph(spans) => output.push_str(&format!("{}\n", render_spans(spans))),
        }
    }
    output
}

/// Titled analysis panel for `expense analyze`
pub fn format_analysis(reply: &str) -> String {
    format!(
        "{}Spending Analysis{}\n{}",
        BOLD,
        RESET,
        render_blocks(&parse_markdown(reply))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Span {
        Span::Plain(s.to_string())
    }

    fn bold(s: &str) -> Span {
        Span::Bold(s.to_string())
    }

    #[test]
    fn test_spans() {
        assert_eq!(
            parse_spans("Your **top** category is **Food**."),
            vec![plain("Your "), bold("top"), plain(" category is "), bold("Food"), plain(".")]
        );
        assert_eq!(parse_spans("no markup"), vec![plain("no markup")]);
        assert_eq!(parse_spans("**unclosed"), vec![plain("**unclosed")]);
    }

    #[test]
    fn test_blocks() {
        let reply = "### Summary\n\nYou spent most on **Food**.\n* Cook at home\n* Track **coffee**\n";
        assert_eq!(
            parse_markdown(reply),
            vec![
                Block::Heading(vec![plain("Summary")]),
                Block::Paragraph(vec![plain("You spent most on "), bold("Food"), plain(".")]),
                Block::Bullet(vec![plain("Cook at home")]),
                Block::Bullet(vec![plain("Track "), bold("coffee")]),
            ]
        );
    }

    #[test]
    fn test_bold_line_is_not_a_bullet() {
        assert_eq!(
            parse_markdown("**Tip:** save more"),
            vec![Block::Paragraph(vec![bold("Tip:"), plain(" save more")])]
        );
    }

    #[test]
    fn test_render_uses_ansi_bold() {
        let text = render_blocks(&parse_markdown("* Track **coffee**"));
        assert_eq!(text, format!("  • Track {}coffee{}\n", BOLD, RESET));
    }
}
