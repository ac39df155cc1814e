//! Handlers for the property listing endpoints.

use axum::extract::{Query, State};
use axum::Json;
use estate_core::error::CoreError;
use estate_core::types::DbId;
use estate_db::models::property::{CreateProperty, UpdateProperty};
use estate_db::models::property_filter::PropertyFilter;
use estate_db::models::property_image::CreatePropertyImage;
use estate_db::repositories::{OwnerRepo, PropertyImageRepo, PropertyRepo};

use crate::error::{AppError, AppResult, OrUnhandled};
use crate::query::{ChangePriceParams, PropertyIdParams};
use crate::response::{PropertyImageResponse, PropertyListResponse, PropertyResponse};
use crate::state::AppState;

fn property_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Property",
        id,
    })
}

/// POST /create-property
///
/// Rejects with 404 before writing anything if the owner does not exist.
#[utoipa::path(
    post,
    path = "/create-property",
    tag = "property",
    request_body = CreateProperty,
    responses(
        (status = 200, description = "Property created", body = PropertyResponse),
        (status = 404, description = "Owner does not exist"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn create_property(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<Json<PropertyResponse>> {
    const FAILED: &str = "An error occurred while creating the property";

    OwnerRepo::find_by_id(&state.pool, input.id_owner)
        .await
        .or_unhandled(FAILED)?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Owner",
                id: input.id_owner,
            })
        })?;

    let property = PropertyRepo::create(&state.pool, &input)
        .await
        .or_unhandled(FAILED)?;
    tracing::info!(
        id_property = property.id_property,
        id_owner = property.id_owner,
        "Property created"
    );

    Ok(Json(PropertyResponse {
        message: "Property created successfully",
        property,
    }))
}

/// POST /add-image?propertyId=
#[utoipa::path(
    post,
    path = "/add-image",
    tag = "property",
    params(PropertyIdParams),
    request_body = CreatePropertyImage,
    responses(
        (status = 200, description = "Image attached, always enabled", body = PropertyImageResponse),
        (status = 404, description = "Property does not exist"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn add_image(
    State(state): State<AppState>,
    Query(params): Query<PropertyIdParams>,
    Json(input): Json<CreatePropertyImage>,
) -> AppResult<Json<PropertyImageResponse>> {
    const FAILED: &str = "An error occurred while sending the image";

    PropertyRepo::find_by_id(&state.pool, params.property_id)
        .await
        .or_unhandled(FAILED)?
        .ok_or_else(|| property_not_found(params.property_id))?;

    let property_image = PropertyImageRepo::create(&state.pool, params.property_id, &input)
        .await
        .or_unhandled(FAILED)?;
    tracing::info!(
        id_property_image = property_image.id_property_image,
        id_property = property_image.id_property,
        bytes = property_image.filed.len(),
        "Property image added"
    );

    Ok(Json(PropertyImageResponse {
        message: "Add Image successfully",
        property_image,
    }))
}

/// PUT /change-price?propertyId=&newPrice=
///
/// No checks on the new price: negative or unchanged values are stored as given.
#[utoipa::path(
    put,
    path = "/change-price",
    tag = "property",
    params(ChangePriceParams),
    responses(
        (status = 200, description = "Price replaced", body = PropertyResponse),
        (status = 404, description = "Property does not exist"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn change_price(
    State(state): State<AppState>,
    Query(params): Query<ChangePriceParams>,
) -> AppResult<Json<PropertyResponse>> {
    const FAILED: &str = "An error occurred while changing the price";

    let property = PropertyRepo::update_price(&state.pool, params.property_id, &params.new_price)
        .await
        .or_unhandled(FAILED)?
        .ok_or_else(|| property_not_found(params.property_id))?;
    tracing::info!(id_property = property.id_property, price = %property.price, "Price changed");

    Ok(Json(PropertyResponse {
        message: "Change price successfully",
        property,
    }))
}

/// PUT /update-property?propertyId=
///
/// Full replacement of name, address, price, code and year. Omitted body
/// fields are written as their defaults.
#[utoipa::path(
    put,
    path = "/update-property",
    tag = "property",
    params(PropertyIdParams),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property overwritten", body = PropertyResponse),
        (status = 404, description = "Property does not exist"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn update_property(
    State(state): State<AppState>,
    Query(params): Query<PropertyIdParams>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<PropertyResponse>> {
    const FAILED: &str = "An error occurred while updating the property";

    let property = PropertyRepo::update(&state.pool, params.property_id, &input)
        .await
        .or_unhandled(FAILED)?
        .ok_or_else(|| property_not_found(params.property_id))?;
    tracing::info!(id_property = property.id_property, "Property updated");

    Ok(Json(PropertyResponse {
        message: "Update the property successfully",
        property,
    }))
}

/// GET /list-properties?name=&minPrice=&maxPrice=&codeInternal=
#[utoipa::path(
    get,
    path = "/list-properties",
    tag = "property",
    params(PropertyFilter),
    responses(
        (status = 200, description = "Matching properties with their traces", body = PropertyListResponse),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn list_properties(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<Json<PropertyListResponse>> {
    let properties = PropertyRepo::list_with_traces(&state.pool, &filter)
        .await
        .or_unhandled("An error occurred while showing the property")?;

    Ok(Json(PropertyListResponse {
        message: "Show list properties successfully",
        properties,
    }))
}
