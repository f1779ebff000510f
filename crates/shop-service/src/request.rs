//! Request records.
//!
//! Every field is optional on the wire so a missing one can be reported as
//! a `MissingParameter` instead of a decode failure.

use serde::{Deserialize, Serialize};
use shop_commerce::{CommerceError, Currency, Money, ProductId};

/// A budget given either as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetInput {
    Number(serde_json::Number),
    Text(String),
}

impl BudgetInput {
    pub fn to_money(&self, currency: Currency) -> Result<Money, CommerceError> {
        let text = match self {
            BudgetInput::Number(n) => n.to_string(),
            BudgetInput::Text(s) => s.clone(),
        };
        let budget = Money::parse_decimal_truncated(&text, currency)
            .ok_or_else(|| CommerceError::ValidationError(format!("invalid budget: {}", text)))?;
        if budget.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "budget must not be negative: {}",
                text
            )));
        }
        Ok(budget)
    }
}

impl From<&str> for BudgetInput {
    fn from(s: &str) -> Self {
        BudgetInput::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub search: Option<String>,
    pub budget: Option<BudgetInput>,
}

impl RecommendRequest {
    pub fn new(search: impl Into<String>, budget: impl Into<BudgetInput>) -> Self {
        Self {
            search: Some(search.into()),
            budget: Some(budget.into()),
        }
    }

    /// The phrase and budget. A blank phrase is allowed and matches nothing.
    pub fn validate(self, currency: Currency) -> Result<(String, Money), CommerceError> {
        let search = self
            .search
            .ok_or_else(|| CommerceError::MissingParameter("search".into()))?;
        let budget = self
            .budget
            .ok_or_else(|| CommerceError::MissingParameter("budget".into()))?
            .to_money(currency)?;
        Ok((search, budget))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUrlRequest {
    pub product_id: Option<ProductId>,
}

impl ProductUrlRequest {
    pub fn new(product_id: impl Into<ProductId>) -> Self {
        Self {
            product_id: Some(product_id.into()),
        }
    }

    pub fn validate(self) -> Result<ProductId, CommerceError> {
        required_id(self.product_id, "product_id")
    }
}

/// Add a product to the cart with a base64-encoded image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub productid: Option<ProductId>,
    pub filename: Option<String>,
    pub data: Option<String>,
}

/// The checked fields of an upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidUpload {
    pub product_id: ProductId,
    pub filename: String,
    pub data: String,
}

impl UploadRequest {
    pub fn new(
        productid: impl Into<ProductId>,
        filename: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            productid: Some(productid.into()),
            filename: Some(filename.into()),
            data: Some(data.into()),
        }
    }

    pub fn validate(self) -> Result<ValidUpload, CommerceError> {
        Ok(ValidUpload {
            product_id: required_id(self.productid, "productid")?,
            filename: required(self.filename, "filename")?,
            data: required(self.data, "data")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub productid: Option<ProductId>,
}

impl RemoveRequest {
    pub fn new(productid: impl Into<ProductId>) -> Self {
        Self {
            productid: Some(productid.into()),
        }
    }

    pub fn validate(self) -> Result<ProductId, CommerceError> {
        required_id(self.productid, "productid")
    }
}

fn required(value: Option<String>, name: &str) -> Result<String, CommerceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CommerceError::MissingParameter(name.to_string())),
    }
}

fn required_id(value: Option<ProductId>, name: &str) -> Result<ProductId, CommerceError> {
    required(value.map(|id| id.as_str().to_string()), name).map(|id| ProductId::new(id.trim()))
}
