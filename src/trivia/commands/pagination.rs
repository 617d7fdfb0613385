use crate::error::{Result, TriviaError};
use crate::model::Question;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-indexed `page` of `items`, clipped to the input length.
///
/// A page past the end is an empty slice, not an error; callers decide
/// whether emptiness means "not found". `page` must be at least 1, which
/// [`validate_page`] enforces at the command boundary.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(QUESTIONS_PER_PAGE)
        .min(items.len());
    let end = start.saturating_add(QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

pub fn validate_page(page: usize) -> Result<()> {
    if page == 0 {
        return Err(TriviaError::Validation(
            "Page numbers start at 1".to_string(),
        ));
    }
    Ok(())
}

/// One page of a filtered question set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub items: Vec<Question>,
    pub page_number: usize,
    pub page_size: usize,
    /// Size of the whole filtered set, counted before slicing
    pub total_count: usize,
}

impl Page {
    pub fn of(all: &[Question], page_number: usize) -> Self {
        Self {
            items: paginate(all, page_number).to_vec(),
            page_number,
            page_size: QUESTIONS_PER_PAGE,
            total_count: all.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn second_page_of_twelve_holds_the_last_two() {
        let items = numbers(12);
        assert_eq!(paginate(&items, 2), &[11, 12]);
    }

    #[test]
    fn first_page_is_capped_at_page_size() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 1), &numbers(10)[..]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = numbers(12);
        assert!(paginate(&items, 3).is_empty());
        assert!(paginate(&items, usize::MAX).is_empty());
        assert!(paginate::<usize>(&[], 1).is_empty());
    }

    #[test]
    fn pages_are_contiguous_ordered_slices() {
        for len in [0, 1, 9, 10, 11, 20, 37] {
            let items = numbers(len);
            let mut rebuilt = Vec::new();
            for page in 1..=5 {
                let slice = paginate(&items, page);
                assert!(slice.len() <= QUESTIONS_PER_PAGE);
                if let Some(first) = slice.first() {
                    assert_eq!(*first, (page - 1) * QUESTIONS_PER_PAGE + 1);
                    assert!(slice.windows(2).all(|w| w[1] == w[0] + 1));
                }
                rebuilt.extend_from_slice(slice);
            }
            assert_eq!(rebuilt, numbers(len.min(5 * QUESTIONS_PER_PAGE)));
        }
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(matches!(validate_page(0), Err(TriviaError::Validation(_))));
        assert!(validate_page(1).is_ok());
    }

    #[test]
    fn page_counts_the_whole_set() {
        let questions: Vec<Question> = (1..=12)
            .map(|id| Question {
                id,
                text: format!("q{}", id),
                answer: "a".into(),
                difficulty: 1,
                category_id: 1,
            })
            .collect();

        let page = Page::of(&questions, 2);
        assert_eq!(page.total_count, 12);
        assert_eq!(page.page_size, QUESTIONS_PER_PAGE);
        let ids: Vec<_> = page.items.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![11, 12]);
    }
}
