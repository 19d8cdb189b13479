//! Photo API handlers.
//!
//! ```text
//! GET  /photos
//! GET  /photos/{id}
//! POST /photos {"title":"Title Testing","image_url":"http://percobaan.com"}
//! ```
//!
//! Every route is mounted behind [`AuthorizationGate`], so handlers can rely
//! on [`Authenticated`] being present.
//!
//! [`AuthorizationGate`]: crate::inbound::http::auth_gate::AuthorizationGate

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{Photo, PhotoDraft, PhotoId, PhotoWithOwner, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth_gate::Authenticated;
use crate::inbound::http::schemas::{ErrorSchema, PhotoSchema, PhotoWithOwnerSchema};
use crate::inbound::http::state::HttpState;

/// Create request body for `POST /photos`.
///
/// Every field is optional at the wire level so that missing values surface
/// as validation messages rather than JSON errors. `caption` is accepted and
/// then replaced by the derived caption.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreatePhotoRequest {
    #[schema(example = "Title Testing")]
    pub title: Option<String>,
    #[schema(example = "Caption testing")]
    pub caption: Option<String>,
    #[schema(example = "http://percobaan.com")]
    pub image_url: Option<String>,
    /// Defaults to the authenticated user.
    #[serde(alias = "UserId")]
    pub owner_id: Option<i32>,
}

impl From<CreatePhotoRequest> for PhotoDraft {
    fn from(value: CreatePhotoRequest) -> Self {
        Self {
            title: value.title,
            caption: value.caption,
            image_url: value.image_url,
            owner_id: value.owner_id.map(UserId::new),
        }
    }
}

/// List every photo, ordered by id.
#[utoipa::path(
    get,
    path = "/photos",
    responses(
        (status = 200, description = "Photos", body = [PhotoSchema]),
        (status = 401, description = "Missing or invalid credential", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["photos"],
    operation_id = "listPhotos",
    security(("bearer" = []))
)]
#[get("")]
pub async fn list_photos(
    state: web::Data<HttpState>,
    _principal: Authenticated,
) -> ApiResult<web::Json<Vec<Photo>>> {
    let photos = state.photos_query.list_photos().await?;
    Ok(web::Json(photos))
}

/// Fetch one photo together with its owner.
#[utoipa::path(
    get,
    path = "/photos/{id}",
    params(("id" = i32, Path, description = "Photo identifier")),
    responses(
        (status = 200, description = "Photo with owner", body = PhotoWithOwnerSchema),
        (status = 401, description = "Missing or invalid credential", body = ErrorSchema),
        (status = 404, description = "Data not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["photos"],
    operation_id = "getPhoto",
    security(("bearer" = []))
)]
#[get("/{id}")]
pub async fn get_photo(
    state: web::Data<HttpState>,
    _principal: Authenticated,
    path: web::Path<i32>,
) -> ApiResult<web::Json<PhotoWithOwner>> {
    let id = PhotoId::new(path.into_inner());
    let photo = state.photos_query.find_photo(id).await?;
    Ok(web::Json(photo))
}

/// Validate, normalise and store a photo owned by the caller.
#[utoipa::path(
    post,
    path = "/photos",
    request_body = CreatePhotoRequest,
    responses(
        (status = 201, description = "Stored photo", body = PhotoSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 401, description = "Missing or invalid credential", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["photos"],
    operation_id = "createPhoto",
    security(("bearer" = []))
)]
#[post("")]
pub async fn create_photo(
    state: web::Data<HttpState>,
    principal: Authenticated,
    payload: web::Json<CreatePhotoRequest>,
) -> ApiResult<HttpResponse> {
    let draft = PhotoDraft::from(payload.into_inner());
    let photo = state.photos.create_photo(&principal.0, draft).await?;
    Ok(HttpResponse::Created().json(photo))
}
