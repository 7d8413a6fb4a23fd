//! `SeaORM` Entity for the products table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A catalog entry with a stock quantity.
///
/// When `manages_batches` is set, `stock` is a cached value derived from the
/// product's active batches and direct adjustment is rejected; otherwise it
/// is a plain scalar mutated with signed deltas.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Product ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Stock-keeping unit code, if any.
    pub sku: Option<String>,
    /// Unit of measure (pieza, kg, litro, ...).
    pub unit: String,
    /// Current stock level.
    pub stock: Decimal,
    /// Low-stock threshold.
    pub min_stock: Decimal,
    /// Unit cost used for inventory valuation.
    pub cost: Decimal,
    /// Sale price.
    pub price: Decimal,
    /// Whether stock is derived from batches.
    pub manages_batches: bool,
    /// Soft-deactivation flag.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batches::Entity")]
    Batches,
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
