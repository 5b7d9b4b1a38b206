//! Filtered search over classified paper records.

use crate::models::PaperRecord;

/// Optional search criteria, combined with logical AND.
///
/// Omitted (or empty) criteria pass everything: the default filter matches
/// every record.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring match against subject or title
    pub keyword: Option<String>,

    /// Exact year match
    pub year: Option<String>,

    /// Case-insensitive substring match against board
    pub board: Option<String>,
}

impl SearchFilter {
    /// Check whether a record satisfies every present criterion.
    pub fn matches(&self, paper: &PaperRecord) -> bool {
        let keyword_ok = match present(&self.keyword) {
            Some(keyword) => {
                let keyword = keyword.to_lowercase();
                paper.subject.to_lowercase().contains(&keyword)
                    || paper.title.to_lowercase().contains(&keyword)
            }
            None => true,
        };

        let year_ok = match present(&self.year) {
            Some(year) => paper.year == year,
            None => true,
        };

        let board_ok = match present(&self.board) {
            Some(board) => paper.board.to_lowercase().contains(&board.to_lowercase()),
            None => true,
        };

        keyword_ok && year_ok && board_ok
    }

    /// Return the records that satisfy the filter, preserving order.
    pub fn apply(&self, papers: &[PaperRecord]) -> Vec<PaperRecord> {
        papers
            .iter()
            .filter(|paper| self.matches(paper))
            .cloned()
            .collect()
    }
}

/// Treat empty strings the same as absent criteria.
fn present(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(subject: &str, year: &str, board: &str) -> PaperRecord {
        PaperRecord {
            title: format!("{subject} Paper"),
            url: "https://www.gsebeservice.com/Web/x.pdf".to_string(),
            year: year.to_string(),
            month: String::new(),
            board: board.to_string(),
            subject: subject.to_string(),
            grade: "10".to_string(),
        }
    }

    fn sample() -> Vec<PaperRecord> {
        vec![
            paper("Maths", "2021", "Gujarat"),
            paper("English", "2022", "English"),
        ]
    }

    #[test]
    fn test_default_filter_passes_everything() {
        assert_eq!(SearchFilter::default().apply(&sample()).len(), 2);
    }

    #[test]
    fn test_keyword_matches_subject() {
        let filter = SearchFilter {
            keyword: Some("maths".to_string()),
            ..SearchFilter::default()
        };
        let results = filter.apply(&sample());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].subject, "Maths");
    }

    #[test]
    fn test_keyword_matches_title() {
        let mut papers = sample();
        papers[0].title = "Ganit practice set".to_string();
        papers[0].subject = "Unknown".to_string();

        let filter = SearchFilter {
            keyword: Some("ganit".to_string()),
            ..SearchFilter::default()
        };
        assert_eq!(filter.apply(&papers).len(), 1);
    }

    #[test]
    fn test_year_is_exact_match() {
        let filter = SearchFilter {
            year: Some("2022".to_string()),
            ..SearchFilter::default()
        };
        let results = filter.apply(&sample());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].subject, "English");

        let filter = SearchFilter {
            year: Some("202".to_string()),
            ..SearchFilter::default()
        };
        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_board_is_substring_match() {
        let filter = SearchFilter {
            board: Some("guj".to_string()),
            ..SearchFilter::default()
        };
        let results = filter.apply(&sample());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].board, "Gujarat");
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let filter = SearchFilter {
            keyword: Some("Maths".to_string()),
            year: Some("2022".to_string()),
            board: None,
        };
        assert!(filter.apply(&sample()).is_empty());

        let filter = SearchFilter {
            keyword: Some("Maths".to_string()),
            year: Some("2021".to_string()),
            board: Some("Gujarat".to_string()),
        };
        assert_eq!(filter.apply(&sample()).len(), 1);
    }

    #[test]
    fn test_empty_strings_pass_everything() {
        let filter = SearchFilter {
            keyword: Some(String::new()),
            year: Some(String::new()),
            board: Some(String::new()),
        };
        assert_eq!(filter.apply(&sample()).len(), 2);
    }
}
