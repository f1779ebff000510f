//! The shop service: one method per operation plus a raw JSON dispatcher.

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shop_assets::decode_payload;
use shop_commerce::cart::{AssetKeys, AssetOutcome, CartLedger, CartSummary};
use shop_commerce::catalog::product_url;
use shop_commerce::search::{recommend, SearchQuery};
use shop_commerce::store::{AssetStore, CartStore, CatalogStore};
use shop_commerce::CommerceError;
use shop_observability::{RequestId, StructuredLogger};

use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::request::{ProductUrlRequest, RecommendRequest, RemoveRequest, UploadRequest};
use crate::response::{
    ApiResponse, ListResponse, ListedItem, ProductUrlResponse, RecommendedProduct,
    RemoveResponse, Subtotal, UploadResponse,
};

/// Operation names accepted by [`ShopService::handle`].
pub const OPERATIONS: [&str; 5] = ["recommend", "get_product_url", "upload", "list", "remove"];

/// Serves catalog and cart requests over borrowed stores.
///
/// Every call is independent: it builds its own logger and ledger and keeps
/// nothing between requests.
pub struct ShopService<'a> {
    catalog: &'a dyn CatalogStore,
    cart: &'a dyn CartStore,
    assets: &'a dyn AssetStore,
    config: ServiceConfig,
}

impl<'a> ShopService<'a> {
    pub fn new(
        catalog: &'a dyn CatalogStore,
        cart: &'a dyn CartStore,
        assets: &'a dyn AssetStore,
        config: ServiceConfig,
    ) -> Self {
        Self {
            catalog,
            cart,
            assets,
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Ranked recommendations for a phrase under a budget.
    ///
    /// The whole ranking is returned; clients page it themselves.
    pub fn recommend(&self, req: RecommendRequest) -> Result<Vec<RecommendedProduct>, ApiError> {
        let logger = self.logger("recommend");

        let result = req.validate(self.config.currency).and_then(|(phrase, budget)| {
            logger
                .debug_builder("Searching catalog")
                .field("phrase", phrase.as_str())
                .field("budget", budget.display_amount())
                .emit();
            recommend(self.catalog, &SearchQuery::new(phrase, budget))
        });

        let ranked = finish(&logger, result)?;
        logger
            .info_builder("Recommendations ready")
            .field_usize("results", ranked.len())
            .emit();

        Ok(ranked
            .into_products()
            .into_iter()
            .map(|p| RecommendedProduct {
                product_id: p.product_id,
                product_url: p.product_url,
            })
            .collect())
    }

    pub fn product_url(&self, req: ProductUrlRequest) -> Result<ProductUrlResponse, ApiError> {
        let logger = self.logger("get_product_url");

        let result = req
            .validate()
            .and_then(|id| product_url(self.catalog, &id).map(|url| (id, url)));
        let (product_id, product_url) = finish(&logger, result)?;

        logger
            .info_builder("Product found")
            .field("product_id", product_id.as_str())
            .emit();
        Ok(ProductUrlResponse {
            product_id,
            product_url,
        })
    }

    /// Add a product to the cart and store its image.
    ///
    /// The product is looked up before the payload is decoded, and the
    /// payload is decoded before anything is written.
    pub fn upload(&self, req: UploadRequest) -> Result<UploadResponse, ApiError> {
        let logger = self.logger("upload");
        let ledger = self.ledger();

        let result = req.validate().and_then(|upload| {
            let url = product_url(self.catalog, &upload.product_id)?;
            let image = decode_payload(&upload.data).map_err(|e| {
                CommerceError::InvalidAsset(format!("image data is not valid base64: {}", e))
            })?;
            let outcome =
                ledger.add_item_with_image(&upload.product_id, &upload.filename, &image)?;
            Ok((url, image.len(), outcome))
        });
        let (product_url, image_bytes, outcome) = finish(&logger, result)?;

        if let AssetOutcome::Failed(reason) = &outcome.original {
            logger
                .warn_builder("Original image not stored")
                .field("product_id", outcome.item.product_id.as_str())
                .field("reason", reason.as_str())
                .emit();
        }
        logger
            .info_builder("Product added to cart")
            .field("product_id", outcome.item.product_id.as_str())
            .field_usize("image_bytes", image_bytes)
            .emit();

        Ok(UploadResponse {
            product_id: outcome.item.product_id,
            product_url,
            image_stored: outcome.original.is_done(),
        })
    }

    /// Cart contents with their subtotal.
    pub fn list(&self) -> Result<ListResponse, ApiError> {
        let logger = self.logger("list");
        let ledger = self.ledger();

        let result = ledger.list_items().and_then(|items| {
            let summary = CartSummary::from_items(&items, self.config.currency)?;
            Ok((items, summary))
        });
        let (items, summary) = finish(&logger, result)?;

        logger
            .info_builder("Cart listed")
            .field_usize("items", summary.item_count)
            .field("total", summary.total.display_amount())
            .emit();

        Ok(ListResponse {
            items: items.iter().map(ListedItem::from).collect(),
            subtotal: Subtotal::from(&summary),
        })
    }

    /// Remove a product from the cart. A failed thumbnail delete is logged
    /// and reported but does not fail the request.
    pub fn remove(&self, req: RemoveRequest) -> Result<RemoveResponse, ApiError> {
        let logger = self.logger("remove");
        let ledger = self.ledger();

        let result = req.validate().and_then(|id| ledger.remove_item(&id));
        let removal = finish(&logger, result)?;

        if let AssetOutcome::Failed(reason) = &removal.cleanup {
            logger
                .warn_builder("Thumbnail cleanup failed")
                .field("key", removal.item.thumbnail_key.as_str())
                .field("reason", reason.as_str())
                .emit();
        }
        logger
            .info_builder("Product removed from cart")
            .field("product_id", removal.item.product_id.as_str())
            .emit();

        Ok(RemoveResponse::from(&removal))
    }

    /// Dispatch a named operation with an optional JSON body.
    pub fn handle(&self, operation: &str, body: Option<&str>) -> ApiResponse {
        match operation {
            "recommend" => respond(parse(body).and_then(|req| self.recommend(req))),
            "get_product_url" => respond(parse(body).and_then(|req| self.product_url(req))),
            "upload" => respond(parse(body).and_then(|req| self.upload(req))),
            "list" => respond(self.list()),
            "remove" => respond(parse(body).and_then(|req| self.remove(req))),
            other => respond::<()>(Err(ApiError::unknown_operation(other))),
        }
    }

    fn ledger(&self) -> CartLedger<'a> {
        CartLedger::new(self.catalog, self.cart, self.assets)
            .with_keys(AssetKeys::new(self.config.namespace.clone()))
            .with_currency(self.config.currency)
    }

    fn logger(&self, operation: &str) -> StructuredLogger {
        StructuredLogger::new(RequestId::generate())
            .with_operation(operation)
            .with_min_level(self.config.log_level)
            .with_format(self.config.log_format)
    }
}

/// Log a failed call and convert its error.
fn finish<T>(logger: &StructuredLogger, result: Result<T, CommerceError>) -> Result<T, ApiError> {
    result.map_err(|e| {
        let error = ApiError::from(e);
        let builder = if error.status.is_server_error() {
            logger.error_builder("Request failed")
        } else {
            logger.warn_builder("Request rejected")
        };
        builder
            .field_i64("status", i64::from(error.status.as_u16()))
            .field("error", error.message.as_str())
            .emit();
        error
    })
}

/// Decode a request body. An absent or blank body decodes as an empty
/// request so missing fields are reported by name.
fn parse<T: DeserializeOwned + Default>(body: Option<&str>) -> Result<T, ApiError> {
    match body.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}

fn respond<T: Serialize>(result: Result<T, ApiError>) -> ApiResponse {
    let error = match result {
        Ok(value) => match serde_json::to_value(value) {
            Ok(body) => return ApiResponse::ok(body),
            Err(e) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        },
        Err(error) => error,
    };
    ApiResponse {
        status: error.status,
        body: error.to_body(),
    }
}
