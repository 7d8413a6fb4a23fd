//! `SeaORM` Entity for the batches table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One production lot of a product.
///
/// Status (activo/vencido/agotado) is intentionally not a column; it is
/// derived from `current_stock` and `expiration_date` on every read.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Batch ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The product this lot belongs to.
    pub product_id: Uuid,
    /// Human lot number.
    pub batch_number: String,
    /// Unit of measure.
    pub unit: String,
    /// Stock the batch was created with.
    pub initial_stock: Decimal,
    /// Stock currently remaining; `0 <= current_stock <= initial_stock`.
    pub current_stock: Decimal,
    /// Production date.
    pub production_date: Date,
    /// Expiration date.
    pub expiration_date: Date,
    /// Unit cost of this lot.
    pub cost: Decimal,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
