//! Admin dashboard records and the product form.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::{Category, Product, ProductDetails};
use crate::types::{Email, Price, ProductId, UserId};

/// A registered customer, shown read-only on the users tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub joined_on: NaiveDate,
    /// Lifetime number of orders.
    pub order_count: u32,
}

/// Problems with a submitted product form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("product name is required")]
    MissingName,
    #[error("image URL is required")]
    MissingImageUrl,
    #[error("at least one feature is required")]
    NoFeatures,
    #[error("price must be a whole number of rupees, got {0:?}")]
    InvalidPrice(String),
    #[error("rental price must be a positive whole number of rupees, got {0:?}")]
    InvalidRentalPrice(String),
}

/// The add/edit product form, as posted.
///
/// Features are entered as one text field separated by commas or newlines.
/// A non-blank rental price makes the product rentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub features: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rental_price: String,
}

impl ProductDraft {
    /// Pre-fill the form from an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        let details = product.details();
        Self {
            name: details.name.clone(),
            image_url: details.image_url.clone(),
            features: details.features.join(", "),
            price: details.price.amount().to_string(),
            category: details
                .category
                .as_ref()
                .map(|c| c.as_str().to_owned())
                .unwrap_or_default(),
            rental_price: product
                .rental_price_per_day()
                .map(|p| p.amount().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate the form into a product with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found, checking fields in form order.
    pub fn into_product(self, id: ProductId) -> Result<Product, DraftError> {
        self.validate().map(|product| product.with_id(id))
    }

    /// Validate the form without assigning an identifier.
    ///
    /// # Errors
    ///
    /// Returns the first [`DraftError`] found, checking fields in form order.
    pub fn validate(self) -> Result<NewProduct, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }

        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(DraftError::MissingImageUrl);
        }

        let features: Vec<String> = self
            .features
            .split([',', '\n'])
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_owned)
            .collect();
        if features.is_empty() {
            return Err(DraftError::NoFeatures);
        }

        let price = parse_rupees(&self.price)
            .ok_or_else(|| DraftError::InvalidPrice(self.price.trim().to_owned()))?;

        let rental_price_per_day = match self.rental_price.trim() {
            "" => None,
            raw => Some(
                parse_rupees(raw)
                    .filter(|p| *p > Price::ZERO)
                    .ok_or_else(|| DraftError::InvalidRentalPrice(raw.to_owned()))?,
            ),
        };

        Ok(NewProduct {
            name: name.to_owned(),
            image_url: image_url.to_owned(),
            features,
            price,
            category: Category::new(&self.category),
            rental_price_per_day,
        })
    }
}

/// A validated product that has not been stored yet.
///
/// The repository assigns the identifier when it stores the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub image_url: String,
    pub features: Vec<String>,
    pub price: Price,
    pub category: Option<Category>,
    pub rental_price_per_day: Option<Price>,
}

impl NewProduct {
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        let details = ProductDetails {
            id,
            name: self.name,
            image_url: self.image_url,
            features: self.features,
            price: self.price,
            category: self.category,
        };
        match self.rental_price_per_day {
            None => Product::Standard { details },
            Some(rental_price_per_day) => Product::Rentable {
                details,
                rental_price_per_day,
            },
        }
    }
}

/// Whole rupees, allowing digit-group commas (`1,49,990`).
fn parse_rupees(raw: &str) -> Option<Price> {
    let digits: String = raw.trim().chars().filter(|c| *c != ',').collect();
    digits.parse::<u64>().ok().map(Price::from_rupees)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: " Nikon D850 ".to_string(),
            image_url: "https://images.example.com/d850.jpg".to_string(),
            features: "DSLR Camera, 45.7MP,\n4K UHD Video, ".to_string(),
            price: "2,25,000".to_string(),
            category: "Camera".to_string(),
            rental_price: String::new(),
        }
    }

    #[test]
    fn test_into_product_standard() {
        let product = draft().into_product(ProductId::new("4")).unwrap();

        assert!(!product.is_rentable());
        assert_eq!(product.id().as_str(), "4");
        assert_eq!(product.name(), "Nikon D850");
        assert_eq!(product.features(), ["DSLR Camera", "45.7MP", "4K UHD Video"]);
        assert_eq!(product.price(), Price::from_rupees(225_000));
        assert_eq!(product.category().map(Category::as_str), Some("camera"));
    }

    #[test]
    fn test_into_product_rentable() {
        let input = ProductDraft {
            rental_price: "1500".to_string(),
            ..draft()
        };
        let product = input.into_product(ProductId::new("4")).unwrap();
        assert_eq!(product.rental_price_per_day(), Some(Price::from_rupees(1_500)));
    }

    #[test]
    fn test_validate_then_assign_id() {
        let validated = draft().validate().unwrap();
        assert_eq!(validated.name, "Nikon D850");
        assert!(validated.rental_price_per_day.is_none());

        let product = validated.with_id(ProductId::new("12"));
        assert_eq!(product, draft().into_product(ProductId::new("12")).unwrap());
    }

    #[test]
    fn test_into_product_errors() {
        let cases = [
            (
                ProductDraft {
                    name: "  ".to_string(),
                    ..draft()
                },
                DraftError::MissingName,
            ),
            (
                ProductDraft {
                    image_url: String::new(),
                    ..draft()
                },
                DraftError::MissingImageUrl,
            ),
            (
                ProductDraft {
                    features: " , ,".to_string(),
                    ..draft()
                },
                DraftError::NoFeatures,
            ),
            (
                ProductDraft {
                    price: "-5".to_string(),
                    ..draft()
                },
                DraftError::InvalidPrice("-5".to_string()),
            ),
            (
                ProductDraft {
                    rental_price: "0".to_string(),
                    ..draft()
                },
                DraftError::InvalidRentalPrice("0".to_string()),
            ),
        ];

        for (input, expected) in cases {
            assert_eq!(input.into_product(ProductId::new("9")), Err(expected));
        }
    }

    #[test]
    fn test_from_product_prefills_form() {
        let product = ProductDraft {
            rental_price: "1500".to_string(),
            ..draft()
        }
        .into_product(ProductId::new("4"))
        .unwrap();

        let form = ProductDraft::from_product(&product);

        assert_eq!(form.name, "Nikon D850");
        assert_eq!(form.features, "DSLR Camera, 45.7MP, 4K UHD Video");
        assert_eq!(form.price, "225000");
        assert_eq!(form.category, "camera");
        assert_eq!(form.rental_price, "1500");
        assert_eq!(form.into_product(ProductId::new("4")).unwrap(), product);
    }
}
