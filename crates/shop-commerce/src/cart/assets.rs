//! Object keys for product images.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "shopcart";

/// Lays out original and thumbnail keys under one namespace.
///
/// Originals live at `<ns>/<id>.jpg`; thumbnails produced by the image
/// pipeline live at `<ns>/cart_<ns>/<id>.PNG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetKeys {
    namespace: String,
}

impl AssetKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn original_key(&self, id: &ProductId) -> String {
        format!("{}/{}.jpg", self.namespace, id)
    }

    pub fn thumbnail_key(&self, id: &ProductId) -> String {
        format!("{}/{}.PNG", self.thumbnail_prefix(), id)
    }

    pub fn thumbnail_prefix(&self) -> String {
        format!("{}/cart_{}", self.namespace, self.namespace)
    }
}

impl Default for AssetKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

/// Accept only `.jpg` and `.jpeg` uploads.
///
/// The extension is matched in any letter case, so `CHAIR.JPG` from a
/// camera is accepted alongside `chair.jpg`. The stem must be non-empty.
pub fn validate_image_filename(filename: &str) -> Result<(), CommerceError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(stem, ext)| (stem, ext.to_ascii_lowercase()));

    match ext {
        Some((stem, ext)) if !stem.is_empty() && (ext == "jpg" || ext == "jpeg") => Ok(()),
        _ => Err(CommerceError::InvalidAsset(format!(
            "only .jpg and .jpeg images are accepted: {}",
            filename
        ))),
    }
}
