//! Candidate database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Candidate;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "candidates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Candidate {
    fn from(model: Model) -> Self {
        Candidate {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
