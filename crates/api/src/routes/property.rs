//! Route definitions for the property endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST   /create-property                     -> create_property
/// POST   /add-image?propertyId=               -> add_image
/// PUT    /change-price?propertyId=&newPrice=  -> change_price
/// PUT    /update-property?propertyId=         -> update_property
/// GET    /list-properties?name=&minPrice=&maxPrice=&codeInternal=
///                                             -> list_properties
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-property", post(property::create_property))
        .route("/add-image", post(property::add_image))
        .route("/change-price", put(property::change_price))
        .route("/update-property", put(property::update_property))
        .route("/list-properties", get(property::list_properties))
}
