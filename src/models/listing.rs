//! Raw listing data structure.

/// One scraped anchor from the source page: visible text plus its link.
///
/// This is the classifier input. Callers must drop blank listings before
/// classification; `is_blank` exists for that filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    /// Free-form label as scraped (e.g. `"7) Maths Paper (2021)"`)
    pub text: String,

    /// Relative or absolute link target
    pub href: String,
}

impl RawListing {
    /// Create a new listing from scraped anchor parts.
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }

    /// True when either the text or the href is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() || self.href.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(RawListing::new("  ", "/x.pdf").is_blank());
        assert!(RawListing::new("Maths", "").is_blank());
        assert!(!RawListing::new("Maths", "/x.pdf").is_blank());
    }
}
