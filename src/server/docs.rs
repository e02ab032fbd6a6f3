//! OpenAPI document served by Swagger UI.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            AccessTokenDto, LoginDto, RefreshTokenDto, RegisterDto, TokenPairDto,
            VerifiedTokenDto, VerifyTokenDto,
        },
        booking::{BookingDto, BookingListDto, BookingResponseDto, CreateBookingDto, UpdateBookingDto},
        draft::{
            CreateEmptyDraftDto, DraftData, DraftListDto, DraftMediaDto, DraftResponseDto,
            GetOrCreateDraftDto, PropertyDraftDto, ProtectedFields, PublishDraftDto, UpdateDraftDto,
        },
        media::UploadedFileDto,
        payment::{
            CreatePaymentDto, PaginatedPaymentsDto, PaymentDto, PaymentListDto,
            PaymentResponseDto, UpdatePaymentDto,
        },
        property::{
            AddressDto, AmenitiesDto, BathroomDto, BedroomDto, BedsDto, CreateReviewDto,
            KitchenDto, PaginatedPropertiesDto, PhotoDto, PropertyDto, PropertyFields,
            PropertyResponseDto, ReviewDto, ReviewListDto, ReviewResponseDto, SetApprovalDto,
            UpdateReviewDto, VideoDto,
        },
        role_change::{
            ReviewRoleChangeDto, RoleChangeListDto, RoleChangeRequestDto, RoleChangeResponseDto,
            SubmitRoleChangeDto,
        },
        user::{
            NotificationDto, NotificationListDto, NotificationResponseDto, PaginatedUsersDto,
            SendNotificationDto, UpdateUserDto, UserDto, UserListDto, UserResponseDto,
            UserReviewDto, UserReviewListDto,
        },
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            booking::{self, BOOKING_TAG},
            draft::{self, DRAFT_TAG},
            file::{self, FILE_TAG},
            payment::{self, PAYMENT_TAG},
            property::{self, PROPERTY_TAG, REVIEW_TAG},
            role_change::{self, ROLE_CHANGE_TAG},
            user::{self, USER_TAG},
        },
        model::media::MediaKind,
    },
};

/// Registers the `bearer` scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    paths(
        auth::register,
        auth::login,
        auth::refresh,
        auth::logout,
        auth::verify_token,
        auth::get_user,

        user::get_users,
        user::get_user_by_id,
        user::update_user,
        user::deactivate_user,
        user::get_user_reviews,
        user::get_users_by_role,
        user::get_user_by_email,
        user::get_notifications,
        user::send_notification,
        user::mark_notification_read,

        property::get_properties,
        property::create_property,
        property::get_property_by_id,
        property::update_property,
        property::deactivate_property,
        property::set_property_approval,
        property::get_reviews,
        property::add_review,
        property::update_review,
        property::delete_review,

        booking::get_bookings,
        booking::create_booking,
        booking::get_booking_by_id,
        booking::update_booking,
        booking::cancel_booking,

        payment::get_payments,
        payment::get_payments_page,
        payment::create_payment,
        payment::get_payment_by_id,
        payment::update_payment,
        payment::delete_payment,

        role_change::get_role_change_requests,
        role_change::submit_role_change_request,
        role_change::review_role_change_request,
        role_change::delete_role_change_request,

        draft::get_or_create_draft,
        draft::update_draft,
        draft::create_empty_draft,
        draft::create_draft_from_property,
        draft::publish_draft,
        draft::publish_draft_as_new,
        draft::discard_draft,
        draft::get_draft_by_id,
        draft::add_draft_media,
        draft::remove_draft_media,
        draft::submit_draft_for_review,
        draft::get_my_drafts,
        draft::get_my_drafts_not_in_review,
        draft::get_my_drafts_in_review,

        file::upload_file,
        file::confirm_file,
        file::delete_file,
    ),
    components(
        schemas(
            ErrorDto,
            MessageDto,
            RegisterDto,
            LoginDto,
            RefreshTokenDto,
            TokenPairDto,
            AccessTokenDto,
            VerifyTokenDto,
            VerifiedTokenDto,
            UserDto,
            UpdateUserDto,
            UserResponseDto,
            PaginatedUsersDto,
            UserReviewDto,
            UserReviewListDto,
            UserListDto,
            NotificationDto,
            SendNotificationDto,
            NotificationResponseDto,
            NotificationListDto,
            AddressDto,
            AmenitiesDto,
            BedsDto,
            PhotoDto,
            VideoDto,
            BathroomDto,
            KitchenDto,
            BedroomDto,
            ReviewDto,
            PropertyFields,
            PropertyDto,
            PropertyResponseDto,
            PaginatedPropertiesDto,
            SetApprovalDto,
            CreateReviewDto,
            UpdateReviewDto,
            ReviewResponseDto,
            ReviewListDto,
            BookingDto,
            CreateBookingDto,
            UpdateBookingDto,
            BookingResponseDto,
            BookingListDto,
            PaymentDto,
            CreatePaymentDto,
            UpdatePaymentDto,
            PaymentResponseDto,
            PaymentListDto,
            PaginatedPaymentsDto,
            RoleChangeRequestDto,
            SubmitRoleChangeDto,
            ReviewRoleChangeDto,
            RoleChangeResponseDto,
            RoleChangeListDto,
            ProtectedFields,
            DraftData,
            PropertyDraftDto,
            CreateEmptyDraftDto,
            UpdateDraftDto,
            DraftMediaDto,
            DraftResponseDto,
            GetOrCreateDraftDto,
            DraftListDto,
            PublishDraftDto,
            UploadedFileDto,
            MediaKind,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Registration, login and tokens"),
        (name = USER_TAG, description = "User accounts"),
        (name = PROPERTY_TAG, description = "Published properties"),
        (name = REVIEW_TAG, description = "Property reviews"),
        (name = BOOKING_TAG, description = "Bookings"),
        (name = PAYMENT_TAG, description = "Payments"),
        (name = ROLE_CHANGE_TAG, description = "Requests to become a host"),
        (name = DRAFT_TAG, description = "Property drafts"),
        (name = FILE_TAG, description = "Media uploads"),
    )
)]
pub struct ApiDoc;
