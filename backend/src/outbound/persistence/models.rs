//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain values at the boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{
    confirmation_log_contents, confirmation_logs, food_contents, food_contents_foods, foods,
    user_food_sensitivities, users,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub full_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub full_name: &'a str,
    pub phone: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = food_contents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FoodContentRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = food_contents)]
pub(crate) struct NewFoodContentRow<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = foods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FoodRow {
    pub id: i64,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = foods)]
pub(crate) struct NewFoodRow<'a> {
    pub name: &'a str,
    pub image: &'a str,
}

/// `position` preserves the order in which contents were attached.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = food_contents_foods)]
pub(crate) struct FoodContentLinkRow {
    pub food_id: i64,
    pub food_content_id: i64,
    pub position: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_food_sensitivities)]
pub(crate) struct NewSensitivityRow {
    pub user_id: i64,
    pub food_content_id: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = confirmation_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ConfirmationLogRow {
    pub id: i64,
    pub user_id: i64,
    pub food_id: i64,
    pub confirmed_at: DateTime<Utc>,
    pub result: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = confirmation_logs)]
pub(crate) struct NewConfirmationLogRow {
    pub user_id: i64,
    pub food_id: i64,
    pub result: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = confirmation_log_contents)]
pub(crate) struct ConfirmationLogContentRow {
    pub confirmation_log_id: i64,
    pub food_content_id: i64,
}
