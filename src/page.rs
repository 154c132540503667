//! Positioned text records and the paginated-document surface.
//!
//! A paginated document is consumed through the [`PaginatedDocument`] trait:
//! an ordered collection of pages, each page a [`PageText`] holding the
//! positioned [`Word`] and [`Block`] records the underlying extractor
//! reported. Concrete extraction lives outside this module - an adapter
//! produces the records (see the `pdfium` feature), or callers assemble them
//! directly via [`MemoryDocument`].

use crate::error::{Error, Result};
use crate::geometry::Rect;

/// One extracted word and its position within the page's block/line/word
/// hierarchy.
///
/// Immutable once created. `block_n`/`line_n` locate the word in the page's
/// logical structure; `word_n` is its ordinal within the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Bounding box of the word
    pub bbox: Rect,
    /// The word text
    pub text: String,
    /// Index of the containing block
    pub block_n: usize,
    /// Index of the containing line within the block
    pub line_n: usize,
    /// Index of the word within the line
    pub word_n: usize,
}

impl Word {
    /// Create a new word record.
    pub fn new(
        bbox: Rect,
        text: impl Into<String>,
        block_n: usize,
        line_n: usize,
        word_n: usize,
    ) -> Self {
        Self {
            bbox,
            text: text.into(),
            block_n,
            line_n,
            word_n,
        }
    }
}

/// One extracted text block.
///
/// Blocks are part of the extractor surface but unused by the grid inference
/// core, which works from word records alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Bounding box of the block
    pub bbox: Rect,
    /// The block text
    pub text: String,
    /// Index of the block on the page
    pub block_n: usize,
    /// Index of the last line in the block
    pub line_n: usize,
}

/// The text content of one page: positioned words and blocks in the
/// extractor's native order (top-to-bottom, left-to-right).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageText {
    words: Vec<Word>,
    blocks: Vec<Block>,
}

impl PageText {
    /// Create a page from extracted word and block records.
    pub fn new(words: Vec<Word>, blocks: Vec<Block>) -> Self {
        Self { words, blocks }
    }

    /// Iterate over the words on the page in extraction order.
    pub fn words(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Iterate over the text blocks on the page in extraction order.
    pub fn blocks(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Iterate over merged word strings: consecutive words sharing the same
    /// `(block_n, line_n)` are joined with a single space.
    ///
    /// An empty page yields an empty iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmatch::geometry::Rect;
    /// use gridmatch::page::{PageText, Word};
    ///
    /// let words = vec![
    ///     Word::new(Rect::from_points(0.0, 0.0, 30.0, 10.0), "Hello", 0, 0, 0),
    ///     Word::new(Rect::from_points(35.0, 0.0, 65.0, 10.0), "World", 0, 0, 1),
    /// ];
    /// let page = PageText::new(words, Vec::new());
    /// let merged: Vec<String> = page.merged_words().collect();
    /// assert_eq!(merged, vec!["Hello World"]);
    /// ```
    pub fn merged_words(&self) -> MergedWords<'_> {
        MergedWords {
            words: self.words.iter().peekable(),
        }
    }

    /// Whether the page has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lazy iterator over merged word strings.
///
/// Produced by [`PageText::merged_words`]. Each item is the concatenation of
/// a maximal run of words sharing one `(block_n, line_n)` pair.
#[derive(Debug, Clone)]
pub struct MergedWords<'a> {
    words: std::iter::Peekable<std::slice::Iter<'a, Word>>,
}

impl Iterator for MergedWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.words.next()?;
        let mut merged = first.text.clone();
        while let Some(next) = self.words.peek() {
            if next.block_n != first.block_n || next.line_n != first.line_n {
                break;
            }
            merged.push(' ');
            merged.push_str(&next.text);
            self.words.next();
        }
        Some(merged)
    }
}

/// A paginated document: ordered pages of positioned text.
///
/// The narrow seam between the reconciliation core and whatever library
/// extracted the text. Implementations must keep page order stable across
/// calls.
pub trait PaginatedDocument {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// The text content of page `index`.
    ///
    /// Returns [`Error::PageOutOfRange`] when `index >= page_count()`.
    fn page(&self, index: usize) -> Result<&PageText>;
}

/// An in-memory paginated document assembled from pre-extracted records.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pages: Vec<PageText>,
}

impl MemoryDocument {
    /// Create a document from pages in order.
    pub fn new(pages: Vec<PageText>) -> Self {
        Self { pages }
    }
}

impl PaginatedDocument for MemoryDocument {
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
