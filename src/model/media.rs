use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadedFileDto {
    pub success: bool,
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Public path of the stored file, e.g. `/images/<name>`.
    pub url: String,
}
