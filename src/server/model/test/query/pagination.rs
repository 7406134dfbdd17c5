use super::*;

/// Tests a page in the middle of the result set.
///
/// Expected: both neighbours carry the same limit
#[test]
fn middle_page_has_both_neighbours() {
    let summary = PaginationSummary::new(25, 2, 10);

    assert_eq!(summary.next, Some(PageRef { page: 3, limit: 10 }));
    assert_eq!(summary.prev, Some(PageRef { page: 1, limit: 10 }));
}

/// Tests a result set that fits on the first page.
///
/// Expected: no neighbours
#[test]
fn single_page_has_no_neighbours() {
    let summary = PaginationSummary::new(5, 1, 25);

    assert!(!summary.has_next());
    assert!(!summary.has_prev());
    assert_eq!(summary.into_dto(), crate::model::api::PaginationDto::default());
}

/// Tests the last page when the total is an exact multiple of the limit.
///
/// Expected: prev only
#[test]
fn last_full_page_has_no_next() {
    let summary = PaginationSummary::new(20, 2, 10);

    assert!(!summary.has_next());
    assert_eq!(summary.prev, Some(PageRef { page: 1, limit: 10 }));
}

/// Tests a page beyond the end of the result set.
///
/// Expected: prev points back, next is absent
#[test]
fn page_past_end_has_prev_only() {
    let summary = PaginationSummary::new(3, 5, 10);

    assert!(!summary.has_next());
    assert_eq!(summary.prev, Some(PageRef { page: 4, limit: 10 }));
}

/// Tests the summary at the extremes of `u64`.
///
/// Expected: `page * limit` saturates instead of wrapping, so no next page is
/// invented past the total
#[test]
fn saturates_at_u64_extremes() {
    let summary = PaginationSummary::new(u64::MAX, u64::MAX, u64::MAX);

    assert!(!summary.has_next());
    assert_eq!(
        summary.prev,
        Some(PageRef {
            page: u64::MAX - 1,
            limit: u64::MAX
        })
    );

    let summary = PaginationSummary::new(u64::MAX, 1, u64::MAX - 1);
    assert_eq!(
        summary.next,
        Some(PageRef {
            page: 2,
            limit: u64::MAX - 1
        })
    );
    assert!(!summary.has_prev());
}

/// Tests the largest page a translated plan can carry.
///
/// Expected: prev only, no overflow when computing the neighbours
#[test]
fn handles_largest_translated_page() {
    let page = i64::MAX as u64;
    let summary = PaginationSummary::new(10, page, 1);

    assert!(!summary.has_next());
    assert_eq!(summary.prev, Some(PageRef { page: page - 1, limit: 1 }));
}
