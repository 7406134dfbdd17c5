use crate::server::{
    error::{query::QueryError, AppError},
    model::{
        hotel::{CreateHotelParams, UpdateHotelParams},
        query::ListRequestParams,
    },
    service::hotel::HotelService,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::hotel::HotelFactory};

mod update;

fn params(pairs: &[(&str, &str)]) -> ListRequestParams {
    ListRequestParams::from_pairs(pairs.iter().copied())
}
