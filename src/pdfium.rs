//! Paginated-document adapter over pdfium.
//!
//! [`PdfiumDocument::open`] binds the pdfium dynamic library, loads a PDF,
//! and eagerly converts the text of every page into positioned word records.
//! The library and file handles are released before `open` returns; the
//! resulting document is a plain in-memory value.
//!
//! pdfium reports text as segments (runs of uniformly-styled text), not the
//! block/line/word triples some extractors produce. The adapter emits one
//! word record per segment and groups segments sharing a rounded top
//! coordinate into one line. That is enough structure for the offset
//! statistics the inference core consumes.

use std::path::Path;

use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::page::{Block, PageText, PaginatedDocument, Word};

/// A PDF document converted to positioned text records, page by page.
pub struct PdfiumDocument {
    pages: Vec<PageText>,
}

impl PdfiumDocument {
    /// Open a PDF file and extract the positioned text of every page.
    ///
    /// Looks for the pdfium library next to the executable first, then falls
    /// back to the system library path. A missing or unreadable file is
    /// reported as [`Error::Io`]; a file pdfium rejects as [`Error::Pdf`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        std::fs::metadata(path.as_ref())?;
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Pdf(format!("failed to bind pdfium library: {e}")))?;
        let pdfium = Pdfium::new(bindings);

        let document = pdfium
            .load_pdf_from_file(path.as_ref(), None)
            .map_err(|e| Error::Pdf(format!("failed to load PDF: {e}")))?;

        let mut pages = Vec::new();
        for page in document.pages().iter() {
            pages.push(extract_page(&page)?);
        }

        Ok(Self { pages })
    }
}

impl PaginatedDocument for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<&PageText> {
        self.pages.get(index).ok_or(Error::PageOutOfRange {
            index,
            count: self.pages.len(),
        })
    }
}

/// Convert one page's text segments into word and block records.
fn extract_page(page: &PdfPage) -> Result<PageText> {
    let page_height = page.height().value;
    let text = page
        .text()
        .map_err(|e| Error::Pdf(format!("failed to read page text: {e}")))?;

    let mut words: Vec<Word> = Vec::new();
    let mut line_tops: Vec<i64> = Vec::new();

    for segment in text.segments().iter() {
        let content = segment.text();
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        let bounds = segment.bounds();

        // pdfium uses a bottom-left origin; flip to top-left
        let x0 = bounds.left().value;
        let x1 = bounds.right().value;
        let y0 = page_height - bounds.top().value;
        let y1 = page_height - bounds.bottom().value;

        let top = (y0 as f64 * 1000.0).round() as i64;
        let line_n = match line_tops.iter().position(|&t| t == top) {
            Some(n) => n,
            None => {
                line_tops.push(top);
                line_tops.len() - 1
            }
        };
        let word_n = words.iter().filter(|w| w.line_n == line_n).count();

        words.push(Word::new(
            Rect::from_points(x0, y0, x1, y1),
            content,
            0,
            line_n,
            word_n,
        ));
    }

    let blocks = lines_to_blocks(&words);
    log::trace!(
        "extracted {} words across {} lines",
        words.len(),
        line_tops.len()
    );

    Ok(PageText::new(words, blocks))
}

/// Aggregate word records into one block record per line.
fn lines_to_blocks(words: &[Word]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for word in words {
        match blocks.iter_mut().find(|b| b.line_n == word.line_n) {
            Some(block) => {
                block.text.push(' ');
                block.text.push_str(&word.text);
                let x1 = block.bbox.right().max(word.bbox.right());
                let y1 = block.bbox.bottom().max(word.bbox.bottom());
                block.bbox.x = block.bbox.x.min(word.bbox.x);
                block.bbox.y = block.bbox.y.min(word.bbox.y);
                block.bbox.width = x1 - block.bbox.x;
                block.bbox.height = y1 - block.bbox.y;
            }
            None => blocks.push(Block {
                bbox: word.bbox,
                text: word.text.clone(),
                block_n: 0,
                line_n: word.line_n,
            }),
        }
    }
    blocks
}
