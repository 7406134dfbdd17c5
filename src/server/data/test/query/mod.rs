use crate::server::{
    data::query,
    model::{
        hotel::HotelSchema,
        query::{ListRequestParams, QueryPlan, ResourceSchema},
    },
};
use sea_orm::{DbErr, QueryTrait};
