//! Object storage for cart images in shopcart.
//!
//! Original product images and their cart thumbnails live in a bucket under
//! an application namespace. Thumbnail generation happens elsewhere; this
//! crate only stores, fetches and deletes objects.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_assets::{decode_payload, Bucket};
//!
//! let bucket = Bucket::open("data/bucket")?;
//!
//! // Store an uploaded image
//! let bytes = decode_payload(&request.data)?;
//! bucket.put("shopcart/42.jpg", &bytes)?;
//!
//! // Drop its thumbnail
//! bucket.delete("shopcart/cart_shopcart/42.PNG")?;
//! ```

mod bucket;
mod error;

pub use bucket::Bucket;
pub use error::AssetError;

use base64::{engine::general_purpose::STANDARD, Engine};

/// Decode a base64 request payload into raw bytes.
pub fn decode_payload(data: &str) -> Result<Vec<u8>, AssetError> {
    Ok(STANDARD.decode(data.trim())?)
}

/// Encode raw bytes as a base64 payload.
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{decode_payload, encode_payload, AssetError, Bucket};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip() {
        let encoded = encode_payload(b"\xff\xd8\xff\xe0 jpeg");
        assert_eq!(decode_payload(&encoded).unwrap(), b"\xff\xd8\xff\xe0 jpeg");
    }

    #[test]
    fn test_invalid_payload() {
        assert!(matches!(
            decode_payload("not base64!!"),
            Err(AssetError::DecodeError(_))
        ));
    }
}
