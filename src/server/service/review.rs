//! Reviews embedded in properties.
//!
//! Reviews live inside the property row, so every change rewrites the property's review
//! list in a single update.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::property::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    server::{
        data::{booking::BookingRepository, property::PropertyRepository},
        error::AppError,
        model::{
            property::{Property, UserReview},
            user::User,
        },
    },
};

fn validate_score(score: u8) -> Result<(), AppError> {
    if !(1..=5).contains(&score) {
        return Err(AppError::BadRequest(
            "score must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}

fn validate_comment(comment: &str) -> Result<(), AppError> {
    if comment.trim().is_empty() {
        return Err(AppError::BadRequest("comment is required".to_string()));
    }
    Ok(())
}

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn property(&self, property_id: i32) -> Result<Property, AppError> {
        PropertyRepository::new(self.db)
            .find_by_id(property_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Property not found".to_string()))
    }

    pub async fn list(&self, property_id: i32) -> Result<Vec<ReviewDto>, AppError> {
        Ok(self.property(property_id).await?.reviews)
    }

    /// Adds a review written by the caller.
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - The stored review with its generated id
    /// - `Err(AppError::BadRequest)` - Score out of range, blank comment, or a booking that
    ///   is not the caller's stay at this property
    /// - `Err(AppError::NotFound)` - No property with that id
    pub async fn add(
        &self,
        caller: &User,
        property_id: i32,
        dto: CreateReviewDto,
    ) -> Result<ReviewDto, AppError> {
        validate_score(dto.score)?;
        validate_comment(&dto.comment)?;

        let mut property = self.property(property_id).await?;

        if let Some(booking_id) = dto.booking_id {
            let booking = BookingRepository::new(self.db).find_by_id(booking_id).await?;
            let valid = booking
                .is_some_and(|b| b.guest_id == caller.id && b.property_id == property_id);
            if !valid {
                return Err(AppError::BadRequest(
                    "Booking does not belong to this stay".to_string(),
                ));
            }
        }

        let review = ReviewDto {
            id: Uuid::new_v4().to_string(),
            user_id: caller.id,
            booking_id: dto.booking_id,
            score: dto.score,
            comment: dto.comment.trim().to_string(),
            date: Utc::now(),
        };
        property.reviews.push(review.clone());

        PropertyRepository::new(self.db)
            .set_reviews(property_id, &property.reviews)
            .await?;

        Ok(review)
    }

    /// Edits a review. Only its author may do so.
    pub async fn update(
        &self,
        caller: &User,
        property_id: i32,
        review_id: &str,
        dto: UpdateReviewDto,
    ) -> Result<ReviewDto, AppError> {
        let mut property = self.property(property_id).await?;

        let review = property
            .reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if review.user_id != caller.id {
            return Err(AppError::Forbidden(
                "Only the author can edit a review".to_string(),
            ));
        }

        if let Some(score) = dto.score {
            validate_score(score)?;
            review.score = score;
        }
        if let Some(comment) = dto.comment {
            validate_comment(&comment)?;
            review.comment = comment.trim().to_string();
        }
        let updated = review.clone();

        PropertyRepository::new(self.db)
            .set_reviews(property_id, &property.reviews)
            .await?;

        Ok(updated)
    }

    /// Removes a review. Its author and admins may do so.
    pub async fn delete(
        &self,
        caller: &User,
        property_id: i32,
        review_id: &str,
    ) -> Result<(), AppError> {
        let mut property = self.property(property_id).await?;

        let index = property
            .reviews
            .iter()
            .position(|r| r.id == review_id)
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if property.reviews[index].user_id != caller.id && !caller.is_admin() {
            return Err(AppError::Forbidden(
                "Only the author or an admin can delete a review".to_string(),
            ));
        }

        property.reviews.remove(index);

        PropertyRepository::new(self.db)
            .set_reviews(property_id, &property.reviews)
            .await?;

        Ok(())
    }

    /// Every review the user has written, across all properties.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<UserReview>, AppError> {
        let properties = PropertyRepository::new(self.db)
            .get_reviewed_by(user_id)
            .await?;

        Ok(properties
            .into_iter()
            .flat_map(|property| {
                let property_id = property.id;
                property
                    .reviews
                    .into_iter()
                    .filter(move |r| r.user_id == user_id)
                    .map(move |review| UserReview {
                        property_id,
                        review,
                    })
            })
            .collect())
    }
}
