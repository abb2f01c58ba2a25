//! Vehicle handlers
//!
//! Endpoints for the vehicle catalog. Every vehicle in a response carries its
//! price and address; when a lookup failed the corresponding object is the
//! fixed "unavailable" sentinel, so the response shape never changes.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{
    AddressInfo, Condition, Details, Enrichment, Location, Manufacturer, NewVehicle, PriceInfo,
    VehicleId, VehicleView, PRICE_UNAVAILABLE,
};
use crate::error::AppError;
use crate::handlers::extract::{ValidatedJson, VehicleIdPath};
use crate::AppState;

/// Request body for creating or replacing a vehicle
///
/// Unknown fields (id, price, address, links) are ignored so a previously
/// returned vehicle can be sent back as-is.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub condition: Condition,
    #[validate(nested)]
    pub location: LocationDto,
    #[validate(nested)]
    pub details: DetailsDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "must be within [-90, 90]"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "must be within [-180, 180]"))]
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ManufacturerDto {
    pub code: i32,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DetailsDto {
    #[validate(nested)]
    pub manufacturer: ManufacturerDto,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub body: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub model: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub number_of_doors: i32,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub mileage: i32,
    pub model_year: i32,
    pub production_year: i32,
    #[serde(default)]
    pub external_color: String,
}

/// Price as exposed to clients; `available: false` marks the sentinel
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceDto {
    pub available: bool,
    pub currency: String,
    pub amount: String,
}

/// Address as exposed to clients; `available: false` marks the sentinel
#[derive(Debug, Serialize, Deserialize)]
pub struct AddressDto {
    pub available: bool,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinksDto {
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Response body for a single aggregated vehicle
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i64,
    pub created_at: String,
    pub modified_at: String,
    pub condition: Condition,
    pub details: DetailsDto,
    pub location: LocationDto,
    pub price: PriceDto,
    pub address: AddressDto,
    pub links: LinksDto,
}

impl From<VehicleRequest> for NewVehicle {
    fn from(request: VehicleRequest) -> Self {
        let details = request.details;
        NewVehicle {
            condition: request.condition,
            location: Location {
                lat: request.location.lat,
                lon: request.location.lon,
            },
            details: Details {
                manufacturer: Manufacturer {
                    code: details.manufacturer.code,
                    name: details.manufacturer.name,
                },
                body: details.body,
                model: details.model,
                number_of_doors: details.number_of_doors,
                fuel_type: details.fuel_type,
                engine: details.engine,
                mileage: details.mileage,
                model_year: details.model_year,
                production_year: details.production_year,
                external_color: details.external_color,
            },
        }
    }
}

impl From<Details> for DetailsDto {
    fn from(details: Details) -> Self {
        DetailsDto {
            manufacturer: ManufacturerDto {
                code: details.manufacturer.code,
                name: details.manufacturer.name,
            },
            body: details.body,
            model: details.model,
            number_of_doors: details.number_of_doors,
            fuel_type: details.fuel_type,
            engine: details.engine,
            mileage: details.mileage,
            model_year: details.model_year,
            production_year: details.production_year,
            external_color: details.external_color,
        }
    }
}

impl From<Enrichment<PriceInfo>> for PriceDto {
    fn from(price: Enrichment<PriceInfo>) -> Self {
        match price {
            Enrichment::Succeeded(p) => PriceDto {
                available: true,
                currency: p.currency,
                amount: p.amount.to_string(),
            },
            Enrichment::Failed => PriceDto {
                available: false,
                currency: String::new(),
                amount: PRICE_UNAVAILABLE.to_string(),
            },
        }
    }
}

impl From<Enrichment<AddressInfo>> for AddressDto {
    fn from(address: Enrichment<AddressInfo>) -> Self {
        let info = address.as_option().cloned().unwrap_or_default();

        AddressDto {
            available: address.is_available(),
            address: info.address,
            city: info.city,
            state: info.state,
            zip: info.zip,
        }
    }
}

impl From<VehicleView> for VehicleResponse {
    fn from(view: VehicleView) -> Self {
        let vehicle = view.vehicle;

        VehicleResponse {
            id: vehicle.id.0,
            created_at: vehicle.created_at.to_rfc3339(),
            modified_at: vehicle.modified_at.to_rfc3339(),
            condition: vehicle.condition,
            details: vehicle.details.into(),
            location: LocationDto {
                lat: vehicle.location.lat,
                lon: vehicle.location.lon,
            },
            price: view.price.into(),
            address: view.address.into(),
            links: LinksDto {
                self_link: vehicle_path(vehicle.id),
            },
        }
    }
}

fn vehicle_path(id: VehicleId) -> String {
    format!("/vehicles/{}", id)
}

/// GET /vehicles
///
/// List all vehicles with price and address.
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let views = state.vehicle_service.list().await?;
    Ok(Json(views.into_iter().map(VehicleResponse::from).collect()))
}

/// GET /vehicles/:id
pub async fn get_vehicle(
    State(state): State<AppState>,
    VehicleIdPath(id): VehicleIdPath,
) -> Result<Json<VehicleResponse>, AppError> {
    let view = state.vehicle_service.find_by_id(id).await?;
    Ok(Json(view.into()))
}

/// POST /vehicles
///
/// Create a vehicle. Responds 201 with a Location header pointing at it.
pub async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.vehicle_service.save(None, request.into()).await?;
    let location = vehicle_path(view.vehicle.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VehicleResponse::from(view)),
    ))
}

/// PUT /vehicles/:id
///
/// Replace condition, details and location of an existing vehicle.
pub async fn update_vehicle(
    State(state): State<AppState>,
    VehicleIdPath(id): VehicleIdPath,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let view = state
        .vehicle_service
        .save(Some(id), request.into())
        .await?;
    Ok(Json(view.into()))
}

/// DELETE /vehicles/:id
pub async fn delete_vehicle(
    State(state): State<AppState>,
    VehicleIdPath(id): VehicleIdPath,
) -> Result<StatusCode, AppError> {
    state.vehicle_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
