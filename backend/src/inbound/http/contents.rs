//! Food content listing.

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ok;
use crate::inbound::http::state::HttpState;

/// List every food content.
#[utoipa::path(
    get,
    path = "/api/food-contents/",
    responses(
        (status = 200, description = "Food contents", body = crate::inbound::http::schemas::ContentListEnvelope)
    ),
    tags = ["foods"],
    operation_id = "listFoodContents"
)]
#[get("/food-contents/")]
pub async fn list_contents(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let contents = state.catalogue.list_contents().await?;
    Ok(ok("Food contents", contents))
}
