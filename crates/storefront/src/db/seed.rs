//! Demo data loaded into the in-memory repositories at startup.
//!
//! The storefront catalog, the admin product table, the checkout cart and the
//! customer list are independent data sets.

use core::num::NonZeroU32;

use chrono::NaiveDate;
use shutterhive_core::admin::UserRecord;
use shutterhive_core::catalog::{Category, Product, ProductDetails};
use shutterhive_core::checkout::{CartLine, LineKind, RentalPeriod, RentalPeriodError};
use shutterhive_core::{CartLineId, Email, EmailError, Price, ProductId, UserId};
use thiserror::Error;

/// Seed data that fails validation.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed date {0}")]
    InvalidDate(String),
    #[error("invalid seed rental: {0}")]
    RentalPeriod(#[from] RentalPeriodError),
    #[error("invalid seed email: {0}")]
    Email(#[from] EmailError),
}

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    image_url: &'static str,
    features: &'static [&'static str],
    price: u64,
    category: Option<&'static str>,
    rental_per_day: Option<u64>,
}

impl SeedProduct {
    fn build(&self) -> Product {
        let details = ProductDetails {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            image_url: self.image_url.to_string(),
            features: self.features.iter().map(|f| (*f).to_string()).collect(),
            price: Price::from_rupees(self.price),
            category: self.category.and_then(Category::new),
        };
        match self.rental_per_day {
            None => Product::Standard { details },
            Some(per_day) => Product::Rentable {
                details,
                rental_price_per_day: Price::from_rupees(per_day),
            },
        }
    }
}

const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        id: "1",
        name: "Canon EOS 1500D DSLR Camera",
        image_url: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=800&q=80",
        features: &[
            "24.1MP APS-C CMOS Sensor",
            "DIGIC 4+ Image Processor",
            "Full HD 1080p Video Recording",
        ],
        price: 35_999,
        category: Some("camera"),
        rental_per_day: Some(500),
    },
    SeedProduct {
        id: "2",
        name: "Sony Alpha a7 III Mirrorless Camera",
        image_url: "https://images.unsplash.com/photo-1516724562728-afc824a36e84?w=800&q=80",
        features: &[
            "24.2MP Full-Frame Exmor R BSI CMOS Sensor",
            "4K Video Recording",
            "5-Axis SteadyShot INSIDE",
        ],
        price: 149_990,
        category: Some("camera"),
        rental_per_day: Some(1_200),
    },
    SeedProduct {
        id: "3",
        name: "Manfrotto Professional Tripod",
        image_url: "https://images.unsplash.com/photo-1584824388173-6d975a254c9e?w=800&q=80",
        features: &[
            "Carbon Fiber Construction",
            "Maximum Height: 175cm",
            "Load Capacity: 8kg",
        ],
        price: 12_999,
        category: Some("accessory"),
        rental_per_day: Some(100),
    },
    SeedProduct {
        id: "4",
        name: "Godox SL-60W LED Video Light",
        image_url: "https://images.unsplash.com/photo-1533425962554-8a7d3e36c944?w=800&q=80",
        features: &["60W Output", "5600K Color Temperature", "Wireless Remote Control"],
        price: 9_999,
        category: Some("lighting"),
        rental_per_day: None,
    },
    SeedProduct {
        id: "5",
        name: "DJI Ronin-S Gimbal Stabilizer",
        image_url: "https://images.unsplash.com/photo-1595073752802-7b1db8839501?w=800&q=80",
        features: &[
            "3-Axis Stabilization",
            "8-Hour Battery Life",
            "Supports up to 8 lbs",
        ],
        price: 39_999,
        category: Some("accessory"),
        rental_per_day: None,
    },
    SeedProduct {
        id: "6",
        name: "Nikon Z6 II Mirrorless Camera",
        image_url: "https://images.unsplash.com/photo-1581591524425-c7e0978865fc?w=800&q=80",
        features: &[
            "24.5MP BSI CMOS Sensor",
            "4K UHD Video Recording",
            "In-Body Image Stabilization",
        ],
        price: 164_990,
        category: Some("camera"),
        rental_per_day: Some(1_500),
    },
    SeedProduct {
        id: "7",
        name: "SanDisk Extreme Pro 128GB SD Card",
        image_url: "https://images.unsplash.com/photo-1499678329028-101435549a4e?w=800&q=80",
        features: &[
            "Read Speed: up to 170MB/s",
            "Write Speed: up to 90MB/s",
            "UHS-I / V30 / U3 / Class 10",
        ],
        price: 2_499,
        category: Some("accessory"),
        rental_per_day: None,
    },
    SeedProduct {
        id: "8",
        name: "Lowepro ProTactic 450 AW II Camera Backpack",
        image_url: "https://images.unsplash.com/photo-1622560480654-d96214fdc887?w=800&q=80",
        features: &[
            "Fits 1-2 Pro DSLRs",
            "Holds 8 Lenses/Speed Lights",
            "Dedicated Laptop Compartment",
        ],
        price: 14_999,
        category: Some("accessory"),
        rental_per_day: None,
    },
];

const ADMIN_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        id: "1",
        name: "Canon EOS 1500D",
        image_url: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=400&q=80",
        features: &["DSLR Camera", "24.1MP", "Full HD Video"],
        price: 35_000,
        category: None,
        rental_per_day: None,
    },
    SeedProduct {
        id: "2",
        name: "Sony Alpha A7 III",
        image_url: "https://images.unsplash.com/photo-1516724562728-afc824a36e84?w=400&q=80",
        features: &["Mirrorless Camera", "24.2MP", "4K Video"],
        price: 150_000,
        category: None,
        rental_per_day: None,
    },
    SeedProduct {
        id: "3",
        name: "Nikon D850",
        image_url: "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=400&q=80",
        features: &["DSLR Camera", "45.7MP", "4K UHD Video"],
        price: 225_000,
        category: None,
        rental_per_day: None,
    },
];

/// The eight products on the storefront catalog.
#[must_use]
pub fn catalog_products() -> Vec<Product> {
    CATALOG.iter().map(SeedProduct::build).collect()
}

/// The three products on the admin dashboard.
#[must_use]
pub fn admin_products() -> Vec<Product> {
    ADMIN_PRODUCTS.iter().map(SeedProduct::build).collect()
}

/// Two purchases and one three-day rental.
///
/// # Errors
///
/// Returns [`SeedError`] if a rental date is invalid.
pub fn cart_lines() -> Result<Vec<CartLine>, SeedError> {
    let single = NonZeroU32::MIN;
    Ok(vec![
        CartLine {
            id: CartLineId::new("1"),
            name: "Canon EOS 1500D".to_string(),
            image_url: "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?w=400&q=80"
                .to_string(),
            unit_price: Price::from_rupees(35_000),
            kind: LineKind::Purchase { quantity: single },
        },
        CartLine {
            id: CartLineId::new("2"),
            name: "Tripod Stand".to_string(),
            image_url: "https://images.unsplash.com/photo-1610847499832-918a1c3c6811?w=400&q=80"
                .to_string(),
            unit_price: Price::from_rupees(2_500),
            kind: LineKind::Purchase { quantity: single },
        },
        CartLine {
            id: CartLineId::new("3"),
            name: "Sony Alpha A7 III".to_string(),
            image_url: "https://images.unsplash.com/photo-1516724562728-afc824a36e84?w=400&q=80"
                .to_string(),
            unit_price: Price::from_rupees(1_500),
            kind: LineKind::Rental {
                period: RentalPeriod::new(date(2023, 7, 15)?, date(2023, 7, 18)?)?,
            },
        },
    ])
}

/// Customers on the admin users tab.
///
/// # Errors
///
/// Returns [`SeedError`] if an email or join date is invalid.
pub fn users() -> Result<Vec<UserRecord>, SeedError> {
    let rows = [
        ("1", "John Doe", "john.doe@example.com", (2023, 1, 15), 5),
        ("2", "Jane Smith", "jane.smith@example.com", (2023, 2, 20), 3),
        ("3", "Robert Johnson", "robert.johnson@example.com", (2023, 3, 10), 8),
    ];

    rows.into_iter()
        .map(|(id, name, email, (y, m, d), order_count)| {
            Ok(UserRecord {
                id: UserId::new(id),
                name: name.to_string(),
                email: Email::parse(email)?,
                joined_on: date(y, m, d)?,
                order_count,
            })
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| SeedError::InvalidDate(format!("{year}-{month:02}-{day:02}")))
}
