use std::num::NonZeroU32;

/// Number of index pages needed to list `total_posts` posts, `per_page` at a time.
///
/// There is always at least one page, the front page, even with no posts.
pub fn page_count(total_posts: usize, per_page: NonZeroU32) -> usize {
    let per_page = per_page.get() as usize;
    total_posts.div_ceil(per_page).max(1)
}

#[cfg(test)]
mod test {
    use super::*;

    fn per_page(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn page_count_partial_last_page() {
        assert_eq!(page_count(10, per_page(4)), 3);
    }

    #[test]
    fn page_count_exact() {
        assert_eq!(page_count(8, per_page(4)), 2);
    }

    #[test]
    fn page_count_empty() {
        assert_eq!(page_count(0, per_page(4)), 1);
    }

    #[test]
    fn page_count_one_per_page() {
        assert_eq!(page_count(7, per_page(1)), 7);
    }
}
