//! SQLite adapter for VehicleRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryOrder, Schema, Set,
};

use crate::domain::entities::{
    Condition, Details, Location, Manufacturer, NewVehicle, Vehicle, VehicleId,
};
use crate::domain::ports::VehicleRepository;
use crate::entity::vehicles;
use crate::error::DomainError;

/// Open the database and make sure the vehicles table exists
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DomainError> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.sqlx_logging(false);
    // Every pooled connection to `:memory:` would otherwise see its own empty database
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    let backend = db.get_database_backend();
    let mut table = Schema::new(backend).create_table_from_entity(vehicles::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    Ok(db)
}

/// SQLite implementation of VehicleRepository
pub struct SqliteVehicleRepository {
    db: DatabaseConnection,
}

impl SqliteVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SqliteVehicleRepository {
    async fn create(&self, vehicle: &NewVehicle) -> Result<Vehicle, DomainError> {
        let now = Utc::now();

        let mut model = active_model_from(vehicle);
        model.created_at = Set(now);
        model.modified_at = Set(now);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into()
    }

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, DomainError> {
        let result = vehicles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.map(Vehicle::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Vehicle>, DomainError> {
        let results = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Vehicle::try_from).collect()
    }

    async fn update(
        &self,
        id: VehicleId,
        vehicle: &NewVehicle,
    ) -> Result<Option<Vehicle>, DomainError> {
        if self.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = active_model_from(vehicle);
        model.id = Set(id.0);
        model.modified_at = Set(Utc::now());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        result.try_into().map(Some)
    }

    async fn delete(&self, id: VehicleId) -> Result<bool, DomainError> {
        let result = vehicles::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Columns shared by inserts and updates; id and created_at stay unset
fn active_model_from(vehicle: &NewVehicle) -> vehicles::ActiveModel {
    let details = &vehicle.details;

    vehicles::ActiveModel {
        condition: Set(vehicle.condition.to_string()),
        latitude: Set(vehicle.location.lat),
        longitude: Set(vehicle.location.lon),
        manufacturer_code: Set(details.manufacturer.code),
        manufacturer_name: Set(details.manufacturer.name.clone()),
        body: Set(details.body.clone()),
        model: Set(details.model.clone()),
        number_of_doors: Set(details.number_of_doors),
        fuel_type: Set(details.fuel_type.clone()),
        engine: Set(details.engine.clone()),
        mileage: Set(details.mileage),
        model_year: Set(details.model_year),
        production_year: Set(details.production_year),
        external_color: Set(details.external_color.clone()),
        ..Default::default()
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<vehicles::Model> for Vehicle {
    type Error = DomainError;

    fn try_from(model: vehicles::Model) -> Result<Self, Self::Error> {
        let condition: Condition = model
            .condition
            .parse()
            .map_err(DomainError::Internal)?;

        Ok(Vehicle {
            id: VehicleId(model.id),
            created_at: model.created_at,
            modified_at: model.modified_at,
            condition,
            location: Location {
                lat: model.latitude,
                lon: model.longitude,
            },
            details: Details {
                manufacturer: Manufacturer {
                    code: model.manufacturer_code,
                    name: model.manufacturer_name,
                },
                body: model.body,
                model: model.model,
                number_of_doors: model.number_of_doors,
                fuel_type: model.fuel_type,
                engine: model.engine,
                mileage: model.mileage,
                model_year: model.model_year,
                production_year: model.production_year,
                external_color: model.external_color,
            },
        })
    }
}
