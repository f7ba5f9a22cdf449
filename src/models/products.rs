use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// SeaORM entity for the `products` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub created_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Outbound representation of a product. Mirrors every column of [`Model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductToReturnDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_date: chrono::DateTime<chrono::Utc>,
}

impl From<Model> for ProductToReturnDto {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            created_date: m.created_date,
        }
    }
}

/// Body of `POST /products`. Carries the same fields as [`ProductToReturnDto`].
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    /// Assigned by the database when omitted.
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Defaults to the time of insertion.
    pub created_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Body of `PUT /products/{id}`. Any `id` or `createdDate` sent along is ignored.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn dto_serializes_in_camel_case() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let dto = ProductToReturnDto::from(Model {
            id: 1,
            name: "Widget".to_string(),
            description: "d".to_string(),
            price: 5.0,
            created_date: created,
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["description"], "d");
        assert_eq!(json["price"].as_f64(), Some(5.0));
        assert_eq!(json["createdDate"], "2024-01-01T00:00:00Z");
        assert!(json.get("created_date").is_none());
    }

    #[test]
    fn create_input_takes_caller_id_and_timestamp() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "A",
            "description": "B",
            "price": 9.99,
            "createdDate": "2024-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(input.id, Some(7));
        assert_eq!(input.name, "A");
        assert_eq!(input.description, "B");
        assert_eq!(input.price, 9.99);
        assert_eq!(
            input.created_date,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn create_input_id_and_timestamp_are_optional() {
        let input: CreateProduct = serde_json::from_value(serde_json::json!({
            "name": "A",
            "description": "B",
            "price": 1,
        }))
        .unwrap();

        assert!(input.id.is_none());
        assert!(input.created_date.is_none());
        assert_eq!(input.price, 1.0);
    }

    #[test]
    fn update_input_ignores_id_and_timestamp() {
        let input: UpdateProduct = serde_json::from_value(serde_json::json!({
            "id": 99,
            "name": "New",
            "description": "new",
            "price": 2.5,
            "createdDate": "2000-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(input.name, "New");
        assert_eq!(input.price, 2.5);
    }
}
