//! Keyword predicate evaluation

use crate::catalog::Book;

/// Case-insensitive substring predicate over title and author.
pub struct KeywordFilter {
    needle: String,
}

impl KeywordFilter {
    /// Builds a filter for the given keyword.
    ///
    /// The keyword is trimmed; an empty or whitespace-only keyword
    /// matches every record (an unfiltered search lists the catalog).
    pub fn new(keyword: &str) -> Self {
        Self {
            needle: keyword.trim().to_lowercase(),
        }
    }

    /// True when this filter accepts every record.
    pub fn matches_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Checks if a record matches: the keyword is contained in the
    /// title or the author, case-folded.
    pub fn matches(&self, book: &Book) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        book.title.to_lowercase().contains(&self.needle)
            || book.author.to_lowercase().contains(&self.needle)
    }
}

/// Filters the collection by keyword, preserving input order.
pub fn search(books: &[Book], keyword: &str) -> Vec<Book> {
    let filter = KeywordFilter::new(keyword);
    books.iter().filter(|b| filter.matches(b)).cloned().collect()
}
