//! Applies a translated [`QueryPlan`] to a SeaORM select.
//!
//! Field names in the plan have already been validated against the resource
//! schema; a name that does not resolve to an entity column here means the
//! schema and the entity disagree, which is reported as `DbErr::Custom`.

use sea_orm::{
    sea_query::Order, ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Value,
};
use std::str::FromStr;

use crate::server::model::query::{
    FilterArgument, FilterClause, FilterOperator, FilterValue, QueryPlan, ResourceSchema,
    SortDirection,
};

impl From<FilterValue> for Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Text(v) => v.into(),
            FilterValue::Integer(v) => v.into(),
            FilterValue::Float(v) => v.into(),
            FilterValue::Timestamp(v) => v.into(),
        }
    }
}

/// Resolves a schema field name to the entity column of the same name.
pub fn column<E: EntityTrait>(field: &str) -> Result<E::Column, DbErr> {
    E::Column::from_str(field)
        .map_err(|_| DbErr::Custom(format!("Field '{}' has no matching column", field)))
}

fn clause_condition<E: EntityTrait>(clause: &FilterClause) -> Result<Condition, DbErr> {
    let col = column::<E>(clause.field)?;

    let condition = match (&clause.operator, &clause.argument) {
        (FilterOperator::In, FilterArgument::List(values)) => {
            Condition::all().add(col.is_in(values.iter().cloned().map(Value::from)))
        }
        (_, FilterArgument::List(values)) => {
            return Err(DbErr::Custom(format!(
                "Operator '{}' on field '{}' cannot take {} values",
                clause.operator.token(),
                clause.field,
                values.len()
            )))
        }
        (op, FilterArgument::Single(value)) => {
            let value = Value::from(value.clone());
            Condition::all().add(match op {
                FilterOperator::Eq => col.eq(value),
                FilterOperator::Gt => col.gt(value),
                FilterOperator::Gte => col.gte(value),
                FilterOperator::Lt => col.lt(value),
                FilterOperator::Lte => col.lte(value),
                FilterOperator::In => col.is_in([value]),
            })
        }
    };

    Ok(condition)
}

/// `E::find()` restricted by every filter in the plan.
///
/// Used both for the page query and for counting the total matches.
pub fn filtered<E: EntityTrait>(plan: &QueryPlan) -> Result<Select<E>, DbErr> {
    let mut select = E::find();
    if plan.filters.is_empty() {
        return Ok(select);
    }

    let mut condition = Condition::all();
    for clause in &plan.filters {
        condition = condition.add(clause_condition::<E>(clause)?);
    }
    select = select.filter(condition);

    Ok(select)
}

/// Adds ordering, the pagination window and the projection to `select`.
///
/// The projection always includes the schema's id field so that callers can
/// attach related records to each row.
pub fn windowed<E, S>(select: Select<E>, plan: &QueryPlan) -> Result<Select<E>, DbErr>
where
    E: EntityTrait,
    S: ResourceSchema,
{
    let mut select = select;

    for key in &plan.sort {
        let order = match key.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        select = select.order_by(column::<E>(key.field)?, order);
    }
    // Stable paging when sort keys tie.
    select = select.order_by(column::<E>(S::ID_FIELD)?, Order::Asc);

    select = select.offset(plan.skip).limit(plan.limit);

    if let Some(projection) = &plan.projection {
        let mut columns = vec![column::<E>(S::ID_FIELD)?];
        for field in projection.iter().filter(|f| **f != S::ID_FIELD) {
            columns.push(column::<E>(field)?);
        }
        select = select.select_only().columns(columns);
    }

    Ok(select)
}
