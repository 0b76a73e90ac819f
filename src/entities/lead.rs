//! Lead entity carrying a recurring delivery schedule.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leads")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub name: String,
    pub recurrence_plan: Option<String>,
    pub preferred_weekday: Option<String>,
    pub next_delivery_date: Option<String>, // YYYY-MM-DD
    pub created_at: String,                 // YYYY-MM-DDTHH:MM:SS, local
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

