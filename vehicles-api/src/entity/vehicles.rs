use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
    pub condition: String,
    pub latitude: f64,
    pub longitude: f64,
    pub manufacturer_code: i32,
    pub manufacturer_name: String,
    pub body: String,
    pub model: String,
    pub number_of_doors: i32,
    pub fuel_type: String,
    pub engine: String,
    pub mileage: i32,
    pub model_year: i32,
    pub production_year: i32,
    pub external_color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
