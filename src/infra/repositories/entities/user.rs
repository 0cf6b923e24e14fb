//! SeaORM entity for the `usuarios` table.
//!
//! The unique index on `email` is the sole authority for duplicate
//! detection; nothing pre-checks uniqueness before writing.
//! `Model` intentionally does not derive `Serialize`.

use sea_orm::entity::prelude::*;

use crate::domain::Usuario;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Usuario {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            nombre: model.nombre,
            email: model.email,
            password: model.password,
        }
    }
}
