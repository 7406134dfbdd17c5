//! List request translation.
//!
//! Turns the raw query string of a list request into a [`QueryPlan`]: typed
//! filters, an optional projection, sort keys and a pagination window. Every
//! field the caller names is checked against the resource's [`ResourceSchema`]
//! before anything reaches the data layer.
//!
//! Filter syntax follows the bracket convention:
//!
//! ```text
//! ?province=Bangkok&postal_code[gte]=10000&region[in]=North,South&sort=-name&page=2
//! ```
//!
//! Only a trailing `[op]` on the key is an operator token. Values are never
//! scanned for operator words.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::fmt;

use crate::server::error::query::QueryError;

/// Keys consumed by the translator itself rather than treated as filters.
pub const RESERVED_KEYS: [&str; 4] = ["select", "sort", "page", "limit"];

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;

/// Largest row offset a list request may reach.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Raw `(key, value)` pairs of a list request, in query string order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRequestParams {
    pairs: Vec<(String, String)>,
}

impl ListRequestParams {
    /// Parses a raw, percent-encoded query string.
    ///
    /// `None` (no query string at all) yields empty params.
    pub fn from_query(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Self { pairs }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of a reserved key. The last occurrence wins.
    pub fn reserved(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every pair whose key is not reserved.
    pub fn filter_candidates(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .filter(|(k, _)| !RESERVED_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FilterOperator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "eq" => Some(Self::Eq),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
        }
    }

    /// Splits a filter key into field name and operator.
    ///
    /// `price[gte]` becomes `("price", Gte)`. A key without a recognised
    /// bracket suffix is returned whole with `Eq`, so `price[ne]` stays the
    /// literal field name `price[ne]`.
    pub fn split_key(key: &str) -> (&str, FilterOperator) {
        if let Some(stripped) = key.strip_suffix(']') {
            if let Some(open) = stripped.rfind('[') {
                let field = &stripped[..open];
                if !field.is_empty() {
                    if let Some(op) = Self::from_token(&stripped[open + 1..]) {
                        return (field, op);
                    }
                }
            }
        }

        (key, FilterOperator::Eq)
    }
}

/// Declared type of a resource field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Float,
    Timestamp,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Timestamp => "RFC 3339 timestamp or YYYY-MM-DD date",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Field declarations of a listable resource.
pub trait ResourceSchema {
    /// Every field callers may filter, select or sort on.
    const FIELDS: &'static [FieldSpec];

    /// Always part of the projection.
    const ID_FIELD: &'static str = "id";

    /// Default sort key (descending) when the request has no `sort`.
    const CREATED_AT_FIELD: &'static str = "created_at";

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|f| f.name == name)
    }

    fn require_field(name: &str) -> Result<&'static FieldSpec, QueryError> {
        Self::field(name).ok_or_else(|| QueryError::UnknownField {
            field: name.to_string(),
        })
    }
}

/// Filter value parsed according to the field's [`FieldKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl FilterValue {
    pub fn parse(spec: &FieldSpec, raw: &str) -> Result<Self, QueryError> {
        let invalid = || QueryError::InvalidValue {
            field: spec.name.to_string(),
            value: raw.to_string(),
            expected: spec.kind,
        };

        match spec.kind {
            FieldKind::Text => Ok(Self::Text(raw.to_string())),
            FieldKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Self::Integer)
                .map_err(|_| invalid()),
            FieldKind::Float => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Self::Float)
                .ok_or_else(invalid),
            FieldKind::Timestamp => parse_timestamp(raw.trim())
                .map(Self::Timestamp)
                .ok_or_else(invalid),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterArgument {
    Single(FilterValue),
    List(Vec<FilterValue>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub field: &'static str,
    pub operator: FilterOperator,
    pub argument: FilterArgument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: SortDirection,
}

/// Persistence-ready description of one list request.
///
/// Invariants: `page >= 1`, `limit >= 1`, `skip == (page - 1) * limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub filters: Vec<FilterClause>,
    /// `None` returns every field.
    pub projection: Option<BTreeSet<&'static str>>,
    pub sort: Vec<SortKey>,
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
}

impl QueryPlan {
    /// Translates list request params against the schema `S`.
    ///
    /// # Returns
    /// - `Ok(QueryPlan)` - Validated plan
    /// - `Err(QueryError)` - Unknown field, ill-typed value, empty `in` list or
    ///   a page whose offset exceeds [`MAX_SKIP`]
    pub fn translate<S: ResourceSchema>(params: &ListRequestParams) -> Result<Self, QueryError> {
        let filters = translate_filters::<S>(params)?;
        let projection = params
            .reserved("select")
            .map(translate_select::<S>)
            .transpose()?
            .flatten();
        let sort = match params.reserved("sort").map(translate_sort::<S>).transpose()? {
            Some(keys) if !keys.is_empty() => keys,
            _ => vec![SortKey {
                field: S::require_field(S::CREATED_AT_FIELD)?.name,
                direction: SortDirection::Desc,
            }],
        };

        let page = parse_positive(params.reserved("page"), DEFAULT_PAGE);
        let limit = parse_positive(params.reserved("limit"), DEFAULT_LIMIT);

        // OFFSET is bound as a signed 64-bit integer.
        let skip = (page - 1)
            .checked_mul(limit)
            .filter(|skip| *skip <= MAX_SKIP)
            .ok_or(QueryError::WindowOutOfRange { page, limit })?;

        Ok(Self {
            filters,
            projection,
            sort,
            page,
            limit,
            skip,
        })
    }
}

/// Missing, non-numeric, zero and negative values all fall back to `default`.
fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
        .map(|v| v as u64)
        .unwrap_or(default)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn translate_filters<S: ResourceSchema>(
    params: &ListRequestParams,
) -> Result<Vec<FilterClause>, QueryError> {
    let mut filters: Vec<FilterClause> = Vec::new();

    for (key, raw) in params.filter_candidates() {
        let (name, operator) = FilterOperator::split_key(key);
        let spec = S::require_field(name)?;

        if operator == FilterOperator::In {
            let values = split_list(raw)
                .map(|v| FilterValue::parse(spec, v))
                .collect::<Result<Vec<_>, _>>()?;

            // Repeated `field[in]` keys widen one list instead of intersecting.
            let existing = filters
                .iter()
                .position(|c| c.field == spec.name && c.operator == FilterOperator::In);
            match existing {
                Some(idx) => {
                    if let FilterArgument::List(list) = &mut filters[idx].argument {
                        list.extend(values);
                    }
                }
                None => filters.push(FilterClause {
                    field: spec.name,
                    operator,
                    argument: FilterArgument::List(values),
                }),
            }
            continue;
        }

        filters.push(FilterClause {
            field: spec.name,
            operator,
            argument: FilterArgument::Single(FilterValue::parse(spec, raw)?),
        });
    }

    if let Some(clause) = filters
        .iter()
        .find(|c| matches!(&c.argument, FilterArgument::List(l) if l.is_empty()))
    {
        return Err(QueryError::EmptyInList {
            field: clause.field.to_string(),
        });
    }

    Ok(filters)
}

/// `None` when the value names no fields at all.
fn translate_select<S: ResourceSchema>(
    raw: &str,
) -> Result<Option<BTreeSet<&'static str>>, QueryError> {
    let fields = split_list(raw)
        .map(|name| S::require_field(name).map(|spec| spec.name))
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok((!fields.is_empty()).then_some(fields))
}

fn translate_sort<S: ResourceSchema>(raw: &str) -> Result<Vec<SortKey>, QueryError> {
    split_list(raw)
        .map(|key| {
            let (name, direction) = match key.strip_prefix('-') {
                Some(name) => (name, SortDirection::Desc),
                None => (key.strip_prefix('+').unwrap_or(key), SortDirection::Asc),
            };
            S::require_field(name).map(|spec| SortKey {
                field: spec.name,
                direction,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    pub page: u64,
    pub limit: u64,
}

/// Neighbouring pages of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationSummary {
    pub next: Option<PageRef>,
    pub prev: Option<PageRef>,
}

impl PaginationSummary {
    /// Computes the summary for `page` of size `limit` over `total` matches.
    ///
    /// `next` exists iff `page * limit < total`; `prev` exists iff
    /// `(page - 1) * limit > 0`.
    pub fn new(total: u64, page: u64, limit: u64) -> Self {
        let end = page.saturating_mul(limit);
        let start = page.saturating_sub(1).saturating_mul(limit);

        Self {
            next: (end < total).then_some(PageRef {
                page: page + 1,
                limit,
            }),
            prev: (start > 0).then_some(PageRef {
                page: page - 1,
                limit,
            }),
        }
    }

    #[cfg(test)]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    #[cfg(test)]
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    pub fn into_dto(self) -> crate::model::api::PaginationDto {
        let page_ref = |p: PageRef| crate::model::api::PageRefDto {
            page: p.page,
            limit: p.limit,
        };

        crate::model::api::PaginationDto {
            next: self.next.map(page_ref),
            prev: self.prev.map(page_ref),
        }
    }
}
