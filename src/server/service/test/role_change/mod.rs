use crate::{
    model::role_change::{ReviewRoleChangeDto, SubmitRoleChangeDto},
    server::{
        data::user::UserRepository, error::AppError, service::role_change::RoleChangeService,
    },
};
use test_utils::{builder::TestBuilder, factory};

use super::as_user;

mod review;
mod submit;

fn application() -> SubmitRoleChangeDto {
    SubmitRoleChangeDto {
        requested_role: 1,
        tax_document: "/pdfs/tax.pdf".to_string(),
        proof_of_residence: "/pdfs/residence.pdf".to_string(),
        criminal_record_certificate: "/pdfs/record.pdf".to_string(),
    }
}
