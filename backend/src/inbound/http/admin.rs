//! Catalogue administration handlers.
//!
//! ```text
//! POST /api/admin/food-contents/ {"name":"gluten"}
//! POST /api/admin/foods/ {"name":"Pizza","image":"foods/pizza.jpg","contents":[1,2]}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{ContentName, FoodName, ImageRef, NewFood};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::created;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, content_ids, map_food_validation_error, require,
};

const NAME: FieldName = FieldName::new("name");
const IMAGE: FieldName = FieldName::new("image");
const CONTENTS: FieldName = FieldName::new("contents");

/// Body for creating a food content.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateContentRequest {
    #[schema(example = "gluten")]
    pub name: Option<String>,
}

/// Body for creating a food.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateFoodRequest {
    #[schema(example = "Pizza")]
    pub name: Option<String>,
    /// Reference to an image already held by the blob store.
    #[schema(example = "foods/pizza.jpg")]
    pub image: Option<String>,
    #[serde(default)]
    #[schema(example = json!([1, 2]))]
    pub contents: Vec<i64>,
}

impl CreateFoodRequest {
    fn into_new_food(self) -> ApiResult<NewFood> {
        let name = FoodName::new(require(self.name, NAME)?).map_err(map_food_validation_error)?;
        let image =
            ImageRef::new(require(self.image, IMAGE)?).map_err(map_food_validation_error)?;
        Ok(NewFood::new(name, image, content_ids(self.contents, CONTENTS)?))
    }
}

/// Create a food content label.
#[utoipa::path(
    post,
    path = "/api/admin/food-contents/",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Food content created", body = crate::inbound::http::schemas::ContentEnvelope),
        (status = 400, description = "Invalid name", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["admin"],
    operation_id = "createFoodContent"
)]
#[post("/admin/food-contents/")]
pub async fn create_content(
    state: web::Data<HttpState>,
    payload: web::Json<CreateContentRequest>,
) -> ApiResult<HttpResponse> {
    let name = ContentName::new(require(payload.into_inner().name, NAME)?)
        .map_err(map_food_validation_error)?;
    let content = state.catalogue_admin.create_content(name).await?;
    Ok(created("Food content created", content))
}

/// Create a food with its contents.
#[utoipa::path(
    post,
    path = "/api/admin/foods/",
    request_body = CreateFoodRequest,
    responses(
        (status = 201, description = "Food created", body = crate::inbound::http::schemas::FoodEnvelope),
        (status = 400, description = "Invalid fields or unknown contents", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["admin"],
    operation_id = "createFood"
)]
#[post("/admin/foods/")]
pub async fn create_food(
    state: web::Data<HttpState>,
    payload: web::Json<CreateFoodRequest>,
) -> ApiResult<HttpResponse> {
    let new_food = payload.into_inner().into_new_food()?;
    let food = state.catalogue_admin.create_food(new_food).await?;
    Ok(created("Food created", food))
}
