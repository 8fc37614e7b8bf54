//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use super::products::ProductCardView;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// How many rentable products the home page features.
const FEATURED_LIMIT: usize = 4;

/// A step in the "how renting works" strip.
#[derive(Clone)]
pub struct HowItWorksStep {
    pub title: &'static str,
    pub body: &'static str,
}

const HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        title: "Pick your gear",
        body: "Browse cameras, lenses and lighting available to buy or rent.",
    },
    HowItWorksStep {
        title: "Choose your dates",
        body: "Rentals are charged per day, from pick-up to return.",
    },
    HowItWorksStep {
        title: "Shoot and return",
        body: "We deliver to your door or you collect from the store.",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductCardView>,
    pub steps: Vec<HowItWorksStep>,
}

/// Display the home page with the first few rentable products.
#[instrument(skip_all)]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let featured = state
        .catalog()
        .list()?
        .iter()
        .filter(|p| p.is_rentable())
        .take(FEATURED_LIMIT)
        .map(ProductCardView::from)
        .collect();

    Ok(HomeTemplate {
        featured,
        steps: HOW_IT_WORKS.to_vec(),
    })
}
