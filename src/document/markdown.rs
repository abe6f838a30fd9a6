use super::node::Document;
use anyhow::{Context, Result};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::fs;
use std::path::Path;

/// Build a document with one copy widget per code block in `content`.
///
/// The text of the closest heading or paragraph before a code block is kept
/// as that widget's caption.
pub fn parse_document(content: &str) -> Document {
    let mut doc = Document::new();

    let mut caption: Option<String> = None;
    let mut prose: Option<String> = None;
    let mut code: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) | Event::Start(Tag::Paragraph) => {
                prose = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) | Event::End(TagEnd::Paragraph) => {
                if let Some(text) = prose.take() {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        caption = Some(text);
                    }
                }
            }
            Event::Start(Tag::CodeBlock(_)) => {
                code = Some(String::new());
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(text) = code.take() {
                    let payload = text.strip_suffix('\n').unwrap_or(&text);
                    doc.append_copyable_block(caption.take().as_deref(), payload);
                }
            }
            Event::Text(text) => {
                if let Some(buf) = code.as_mut() {
                    buf.push_str(&text);
                } else if let Some(buf) = prose.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::Code(text) => {
                if let Some(buf) = prose.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(buf) = prose.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    doc
}

pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;
    Ok(parse_document(&content))
}
