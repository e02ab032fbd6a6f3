use crate::server::{
    data::role_change::RoleChangeRepository,
    model::role_change::{CreateRoleChangeParams, RequestStatus, ReviewRoleChangeParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_pending_by_user;
mod review;

fn host_request(user_id: i32) -> CreateRoleChangeParams {
    CreateRoleChangeParams {
        user_id,
        requested_role: 1,
        tax_document: "/pdfs/tax.pdf".to_string(),
        proof_of_residence: "/pdfs/residence.pdf".to_string(),
        criminal_record_certificate: "/pdfs/record.pdf".to_string(),
    }
}
