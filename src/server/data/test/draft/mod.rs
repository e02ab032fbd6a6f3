use crate::{
    model::{draft::DraftData, property::PropertyFields},
    server::{
        data::draft::DraftRepository,
        model::draft::{CreateDraftParams, DraftReviewFilter},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_property_and_owner;
mod get_by_owner;
