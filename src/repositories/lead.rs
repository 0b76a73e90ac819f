//! Lead repository for database operations.

use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::entities::lead;

/// Repository for lead-related database operations.
pub struct LeadRepository;

impl LeadRepository {
    /// Get all leads ordered by creation time.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<lead::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(lead::Entity::find()
            .order_by_asc(lead::Column::CreatedAt)
            .all(conn)
            .await?)
    }

    /// Get a single lead by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<lead::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(lead::Entity::find_by_id(*uuid).one(conn).await?)
    }

    /// Get leads with both a recurrence plan and a preferred weekday set.
    pub async fn get_scheduled<C>(conn: &C) -> Result<Vec<lead::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(lead::Entity::find()
            .filter(lead::Column::RecurrencePlan.is_not_null())
            .filter(lead::Column::PreferredWeekday.is_not_null())
            .order_by_asc(lead::Column::CreatedAt)
            .all(conn)
            .await?)
    }

    /// Insert a new lead.
    pub async fn create<C>(conn: &C, lead: lead::ActiveModel) -> Result<lead::Model>
    where
        C: ConnectionTrait,
    {
        Ok(lead.insert(conn).await?)
    }

    /// Update a lead in the database.
    pub async fn update<C>(conn: &C, lead: lead::ActiveModel) -> Result<lead::Model>
    where
        C: ConnectionTrait,
    {
        Ok(lead.update(conn).await?)
    }

    /// Write only the next delivery date column.
    pub async fn set_next_delivery_date<C>(conn: &C, model: lead::Model, date: Option<String>) -> Result<lead::Model>
    where
        C: ConnectionTrait,
    {
        let mut active_model: lead::ActiveModel = model.into();
        active_model.next_delivery_date = ActiveValue::Set(date);
        Ok(active_model.update(conn).await?)
    }
}
