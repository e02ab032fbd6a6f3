//! Media kinds and reference normalization.
//!
//! Media is referenced from property documents by URL (`/images/<name>`), by a
//! `fileName` field, or by a bare name. All three shapes normalize to the bare file name,
//! which is what the media store and orphan detection work with.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::property::{BathroomDto, PhotoDto, PropertyFields, VideoDto};

const MIB: usize = 1024 * 1024;

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif"];
const VIDEO_TYPES: &[&str] = &["video/mp4", "video/quicktime"];
const PDF_TYPES: &[&str] = &["application/pdf"];
const TEMP_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "video/mp4",
    "video/quicktime",
    "application/pdf",
];

/// Folder an uploaded file lives in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Pdf,
    /// Staging folder for uploads not yet confirmed into a document.
    Temp,
}

impl MediaKind {
    pub fn folder(self) -> &'static str {
        match self {
            Self::Photo => "images",
            Self::Video => "videos",
            Self::Pdf => "pdfs",
            Self::Temp => "temp",
        }
    }

    pub fn allowed_types(self) -> &'static [&'static str] {
        match self {
            Self::Photo => IMAGE_TYPES,
            Self::Video => VIDEO_TYPES,
            Self::Pdf => PDF_TYPES,
            Self::Temp => TEMP_TYPES,
        }
    }

    pub fn max_bytes(self) -> usize {
        match self {
            Self::Photo | Self::Pdf => 25 * MIB,
            Self::Video | Self::Temp => 100 * MIB,
        }
    }
}

/// Last path segment of a URL, ignoring any query string or fragment.
///
/// A bare file name is returned unchanged.
pub fn file_name_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();

    path.rsplit('/')
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// A document entry that refers to a stored file.
pub trait MediaFile {
    /// Bare file name of the referenced file, if the entry names one.
    fn file_name(&self) -> Option<String>;
}

impl MediaFile for PhotoDto {
    fn file_name(&self) -> Option<String> {
        self.url
            .as_deref()
            .and_then(file_name_from_url)
            .or_else(|| self.file_name.as_deref().and_then(file_name_from_url))
    }
}

impl MediaFile for VideoDto {
    fn file_name(&self) -> Option<String> {
        self.url
            .as_deref()
            .and_then(file_name_from_url)
            .or_else(|| self.file_name.as_deref().and_then(file_name_from_url))
    }
}

/// A stored file referenced by a property document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StoredMedia {
    pub kind: MediaKind,
    pub file_name: String,
}

/// Every stored file referenced by a set of property fields.
///
/// Walks the top-level photo and video lists, every bedroom (and its private
/// bathroom), bathroom and kitchen, and the proof-of-address and land-use-permit PDFs.
pub fn referenced_media(fields: &PropertyFields) -> BTreeSet<StoredMedia> {
    let mut refs = BTreeSet::new();

    fn add<T: MediaFile>(refs: &mut BTreeSet<StoredMedia>, kind: MediaKind, items: &[T]) {
        refs.extend(
            items
                .iter()
                .filter_map(|item| item.file_name())
                .map(|file_name| StoredMedia { kind, file_name }),
        );
    }

    fn add_bathroom(refs: &mut BTreeSet<StoredMedia>, bathroom: &BathroomDto) {
        add(refs, MediaKind::Photo, &bathroom.photos);
        add(refs, MediaKind::Video, &bathroom.videos);
    }

    add(&mut refs, MediaKind::Photo, fields.photos.as_deref().unwrap_or_default());
    add(&mut refs, MediaKind::Video, fields.videos.as_deref().unwrap_or_default());

    for bedroom in fields.bedrooms.iter().flatten() {
        add(&mut refs, MediaKind::Photo, &bedroom.photos);
        add(&mut refs, MediaKind::Video, &bedroom.videos);
        if let Some(bathroom) = &bedroom.bathroom {
            add_bathroom(&mut refs, bathroom);
        }
    }
    for bathroom in fields.bathrooms.iter().flatten() {
        add_bathroom(&mut refs, bathroom);
    }
    for kitchen in fields.kitchens.iter().flatten() {
        add(&mut refs, MediaKind::Photo, &kitchen.photos);
        add(&mut refs, MediaKind::Video, &kitchen.videos);
    }

    let documents = [&fields.proof_of_address, &fields.land_use_permit];
    refs.extend(
        documents
            .into_iter()
            .flatten()
            .filter_map(|url| file_name_from_url(url))
            .map(|file_name| StoredMedia {
                kind: MediaKind::Pdf,
                file_name,
            }),
    );

    refs
}

/// Files referenced by `before` but no longer referenced by `after`.
///
/// A file that merely moved between lists (for example from the property photos into
/// a bedroom) is still referenced and is not reported.
pub fn orphaned_media(before: &PropertyFields, after: &PropertyFields) -> Vec<StoredMedia> {
    let kept = referenced_media(after);

    referenced_media(before)
        .into_iter()
        .filter(|media| !kept.contains(media))
        .collect()
}
