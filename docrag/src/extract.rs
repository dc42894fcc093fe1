//! Text extraction for paged documents.

use tracing::warn;

use crate::document::{Document, DocumentFormat};
use crate::error::{Result, RetrievalError};

/// Page separator for [`DocumentFormat::PagedText`].
const FORM_FEED: u8 = 0x0C;

/// Extract per-page text from a document.
///
/// Returns one string per page, in page order. A page whose bytes do
/// not decode as UTF-8 yields an empty string rather than aborting
/// extraction. Pure transform; no side effects beyond a warning log
/// for malformed pages.
///
/// # Errors
///
/// Returns [`RetrievalError::Extraction`] if the bytes cannot be
/// parsed as the declared format at all. For paged text this means
/// binary data: any NUL byte disqualifies the whole document.
pub fn extract_pages(document: &Document) -> Result<Vec<String>> {
    match document.format {
        DocumentFormat::PagedText => extract_paged_text(&document.bytes),
    }
}

fn extract_paged_text(bytes: &[u8]) -> Result<Vec<String>> {
    if bytes.contains(&0) {
        return Err(RetrievalError::Extraction(
            "document contains NUL bytes and is not paged text".to_string(),
        ));
    }

    let pages = bytes
        .split(|b| *b == FORM_FEED)
        .enumerate()
        .map(|(page, raw)| match std::str::from_utf8(raw) {
            Ok(text) => text.to_string(),
            Err(e) => {
                warn!(page, error = %e, "page is not valid UTF-8, extracting empty text");
                String::new()
            }
        })
        .collect();

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_split_on_form_feed_in_order() {
        let doc = Document::paged_text(b"first page\x0csecond page\x0cthird".to_vec());
        let pages = extract_pages(&doc).unwrap();
        assert_eq!(pages, vec!["first page", "second page", "third"]);
    }

    #[test]
    fn single_page_document() {
        let doc = Document::paged_text(b"just one page".to_vec());
        assert_eq!(extract_pages(&doc).unwrap(), vec!["just one page"]);
    }

    #[test]
    fn malformed_page_yields_empty_string() {
        let mut bytes = b"good page".to_vec();
        bytes.push(FORM_FEED);
        bytes.extend_from_slice(&[0xFF, 0xFE, 0xFD]);
        bytes.push(FORM_FEED);
        bytes.extend_from_slice(b"another good page");

        let pages = extract_pages(&Document::paged_text(bytes)).unwrap();
        assert_eq!(pages, vec!["good page", "", "another good page"]);
    }

    #[test]
    fn nul_bytes_rejected_as_binary() {
        let doc = Document::paged_text(b"look\x00binary".to_vec());
        assert!(matches!(extract_pages(&doc), Err(RetrievalError::Extraction(_))));
    }

    #[test]
    fn empty_document_yields_single_empty_page() {
        let doc = Document::paged_text(Vec::new());
        assert_eq!(extract_pages(&doc).unwrap(), vec![""]);
    }
}
