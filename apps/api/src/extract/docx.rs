//! DOCX paragraph extraction.
//!
//! A .docx file is a ZIP archive; the document body lives in
//! `word/document.xml`. Text runs (`w:t`) are concatenated in document
//! order, with one newline per paragraph (`w:p`). Any internal failure
//! degrades to empty text.

use std::io::Read;

use anyhow::{Context, Result};
use quick_xml::events::Event;
use tracing::debug;

/// Decompressed size cap for document.xml (zip-bomb protection).
const MAX_DOCUMENT_XML_BYTES: u64 = 50 * 1024 * 1024;

pub fn extract(bytes: &[u8]) -> String {
    match try_extract(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!("DOCX extraction failed, degrading to empty text: {e:#}");
            String::new()
        }
    }
}

fn try_extract(bytes: &[u8]) -> Result<String> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes))
        .context("not a readable ZIP archive")?;
    let entry = archive
        .by_name("word/document.xml")
        .context("word/document.xml not found")?;

    let mut xml = Vec::new();
    entry
        .take(MAX_DOCUMENT_XML_BYTES)
        .read_to_end(&mut xml)
        .context("failed to read word/document.xml")?;
    if xml.len() as u64 >= MAX_DOCUMENT_XML_BYTES {
        anyhow::bail!("word/document.xml exceeds size limit");
    }

    paragraphs_from_xml(&xml)
}

/// Walks the body XML collecting `w:t` text, newline-separated per `w:p`.
fn paragraphs_from_xml(xml: &[u8]) -> Result<String> {
    let mut reader = quick_xml::Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut out = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();
    loop {
        match reader
            .read_event_into(&mut buf)
            .context("malformed document.xml")?
        {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                out.push_str(t.unescape().unwrap_or_default().as_ref());
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(out.trim_end().to_string())
}
