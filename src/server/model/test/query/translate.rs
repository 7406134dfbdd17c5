use super::*;

/// Tests a request without any parameters.
///
/// Expected: no filters, no projection, newest first, first page of the default size
#[test]
fn empty_request_uses_defaults() {
    let plan = translate(&[]).unwrap();

    assert!(plan.filters.is_empty());
    assert_eq!(plan.projection, None);
    assert_eq!(
        plan.sort,
        vec![SortKey {
            field: "created_at",
            direction: SortDirection::Desc
        }]
    );
    assert_eq!(plan.page, DEFAULT_PAGE);
    assert_eq!(plan.limit, DEFAULT_LIMIT);
    assert_eq!(plan.skip, 0);
}

/// Tests the skip computed from page and limit.
///
/// Expected: skip == (page - 1) * limit
#[test]
fn computes_skip() {
    let plan = translate(&[("page", "3"), ("limit", "10")]).unwrap();

    assert_eq!(plan.page, 3);
    assert_eq!(plan.limit, 10);
    assert_eq!(plan.skip, 20);
}

/// Tests page and limit values that are not positive integers.
///
/// Expected: each falls back to its default
#[test]
fn invalid_window_falls_back_to_defaults() {
    for raw in ["0", "-3", "abc", ""] {
        let plan = translate(&[("page", raw), ("limit", raw)]).unwrap();

        assert_eq!(plan.page, DEFAULT_PAGE, "page={raw}");
        assert_eq!(plan.limit, DEFAULT_LIMIT, "limit={raw}");
        assert_eq!(plan.skip, 0);
    }
}

/// Tests page and limit at the top of the accepted range.
///
/// Expected: the plan is built as long as the offset fits a signed 64-bit integer
#[test]
fn accepts_largest_representable_window() {
    let max = i64::MAX.to_string();

    let plan = translate(&[("page", max.as_str()), ("limit", "1")]).unwrap();
    assert_eq!(plan.page, i64::MAX as u64);
    assert_eq!(plan.skip, MAX_SKIP - 1);

    let plan = translate(&[("page", "1"), ("limit", max.as_str())]).unwrap();
    assert_eq!(plan.limit, i64::MAX as u64);
    assert_eq!(plan.skip, 0);

    let plan = translate(&[("page", "2"), ("limit", max.as_str())]).unwrap();
    assert_eq!(plan.skip, MAX_SKIP);
}

/// Tests windows whose offset overflows.
///
/// Expected: Err(QueryError::WindowOutOfRange), whether the product exceeds
/// the signed range or `u64` itself
#[test]
fn rejects_window_beyond_offset_range() {
    let max = i64::MAX.to_string();

    for (page, limit) in [
        (max.as_str(), "2"),
        ("3", max.as_str()),
        (max.as_str(), max.as_str()),
    ] {
        assert_eq!(
            translate(&[("page", page), ("limit", limit)]),
            Err(QueryError::WindowOutOfRange {
                page: page.parse().unwrap(),
                limit: limit.parse().unwrap(),
            }),
            "page={page} limit={limit}"
        );
    }
}

/// Tests values above `i64::MAX`.
///
/// Expected: treated like any other unparsable value and defaulted
#[test]
fn values_beyond_i64_fall_back_to_defaults() {
    let plan = translate(&[("page", "18446744073709551615"), ("limit", "99999999999999999999")])
        .unwrap();

    assert_eq!(plan.page, DEFAULT_PAGE);
    assert_eq!(plan.limit, DEFAULT_LIMIT);
}

/// Tests filters with and without operator suffixes.
///
/// Expected: one clause per key, operator taken from the key only
#[test]
fn translates_filters() {
    let plan = translate(&[("postal_code[gte]", "10000"), ("name", "Budgeteer")]).unwrap();

    assert_eq!(plan.filters.len(), 2);
    assert_eq!(plan.filters[0].field, "postal_code");
    assert_eq!(plan.filters[0].operator, FilterOperator::Gte);
    assert_eq!(
        plan.filters[0].argument,
        FilterArgument::Single(FilterValue::Text("10000".to_string()))
    );
    assert_eq!(plan.filters[1].field, "name");
    assert_eq!(plan.filters[1].operator, FilterOperator::Eq);
}

/// Tests values that contain operator words.
///
/// Expected: the value is matched literally
#[test]
fn does_not_scan_values_for_operators() {
    let plan = translate(&[("name", "gte lte in")]).unwrap();

    assert_eq!(plan.filters[0].operator, FilterOperator::Eq);
    assert_eq!(
        plan.filters[0].argument,
        FilterArgument::Single(FilterValue::Text("gte lte in".to_string()))
    );
}

/// Tests typed fields.
///
/// Expected: integers and timestamps are parsed, bad values are rejected
#[test]
fn parses_typed_values() {
    let plan = translate(&[("id[gt]", "4"), ("created_at[lt]", "2024-01-31")]).unwrap();

    assert_eq!(
        plan.filters[0].argument,
        FilterArgument::Single(FilterValue::Integer(4))
    );
    assert!(matches!(
        plan.filters[1].argument,
        FilterArgument::Single(FilterValue::Timestamp(_))
    ));

    assert!(matches!(
        translate(&[("id", "four")]),
        Err(QueryError::InvalidValue { field, .. }) if field == "id"
    ));
}

/// Tests `in` lists, including a key given twice.
///
/// Expected: one clause whose list accumulates every value
#[test]
fn accumulates_repeated_in_lists() {
    let plan = translate(&[("region[in]", "North, South"), ("region[in]", "East")]).unwrap();

    assert_eq!(plan.filters.len(), 1);
    assert_eq!(plan.filters[0].operator, FilterOperator::In);
    assert_eq!(
        plan.filters[0].argument,
        FilterArgument::List(vec![
            FilterValue::Text("North".to_string()),
            FilterValue::Text("South".to_string()),
            FilterValue::Text("East".to_string()),
        ])
    );
}

/// Tests an `in` filter without values.
///
/// Expected: Err(QueryError::EmptyInList)
#[test]
fn rejects_empty_in_list() {
    assert_eq!(
        translate(&[("region[in]", " , ")]),
        Err(QueryError::EmptyInList {
            field: "region".to_string()
        })
    );
}

/// Tests unknown fields in filters, `select` and `sort`.
///
/// Expected: Err(QueryError::UnknownField) for each
#[test]
fn rejects_unknown_fields() {
    for pairs in [
        [("password", "x")],
        [("select", "name,password")],
        [("sort", "-password")],
    ] {
        assert!(matches!(
            translate(&pairs),
            Err(QueryError::UnknownField { field }) if field == "password"
        ));
    }
}

/// Tests the `select` projection.
///
/// Expected: exactly the named fields; an empty value behaves as absent
#[test]
fn translates_select() {
    let plan = translate(&[("select", "name, region,name")]).unwrap();

    assert_eq!(
        plan.projection,
        Some(BTreeSet::from(["name", "region"]))
    );

    let plan = translate(&[("select", ",,")]).unwrap();
    assert_eq!(plan.projection, None);
}

/// Tests sort keys with direction prefixes.
///
/// Expected: keys in request order; an empty value falls back to newest first
#[test]
fn translates_sort() {
    let plan = translate(&[("sort", "-region,name")]).unwrap();

    assert_eq!(
        plan.sort,
        vec![
            SortKey {
                field: "region",
                direction: SortDirection::Desc
            },
            SortKey {
                field: "name",
                direction: SortDirection::Asc
            },
        ]
    );

    let plan = translate(&[("sort", ",")]).unwrap();
    assert_eq!(plan.sort[0].field, "created_at");
    assert_eq!(plan.sort[0].direction, SortDirection::Desc);
}

/// Tests that reserved keys never become filters.
///
/// Expected: no filter clauses
#[test]
fn reserved_keys_are_not_filters() {
    let plan = translate(&[
        ("select", "name"),
        ("sort", "name"),
        ("page", "2"),
        ("limit", "5"),
    ])
    .unwrap();

    assert!(plan.filters.is_empty());
}
