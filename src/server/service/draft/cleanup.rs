//! Deletion of media a published draft dropped.

use crate::{
    model::property::PropertyFields,
    server::{model::media::orphaned_media, storage::MediaStore},
};

/// Deletes files referenced by `before` that `after` no longer references.
///
/// A file that is already gone counts as deleted. Any other failure is logged and
/// returned as a warning; the remaining files are still attempted.
pub async fn delete_orphaned_media(
    media: &MediaStore,
    before: &PropertyFields,
    after: &PropertyFields,
) -> Vec<String> {
    let mut warnings = Vec::new();

    for orphan in orphaned_media(before, after) {
        let folder = orphan.kind.folder();

        match media.delete_quietly(orphan.kind, &orphan.file_name).await {
            Ok(true) => tracing::info!("Deleted orphaned file {}/{}", folder, orphan.file_name),
            Ok(false) => {
                tracing::debug!("Orphaned file {}/{} was already gone", folder, orphan.file_name)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to delete orphaned file {}/{}: {}",
                    folder,
                    orphan.file_name,
                    e
                );
                warnings.push(format!(
                    "File {}/{} could not be deleted",
                    folder, orphan.file_name
                ));
            }
        }
    }

    warnings
}
