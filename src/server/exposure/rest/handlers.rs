//! Generic CRUD handlers shared by every registered resource

use super::mapper::ResourceMapper;
use crate::core::error::{ApiError, ApiResult, RequestError};
use crate::core::resource::ResourceId;
use crate::core::service::ResourceService;
use crate::core::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

/// Router state for one resource type
pub struct ResourceState<T> {
    pub service: Arc<dyn ResourceService<T>>,
}

impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

fn parse_id(raw: &str) -> Result<ResourceId, ApiError> {
    raw.parse().map_err(|_| {
        RequestError::InvalidEntityId {
            id: raw.to_string(),
        }
        .into()
    })
}

pub async fn list_resources<T: ResourceMapper>(
    State(state): State<ResourceState<T>>,
) -> ApiResult<Json<Vec<T::Response>>> {
    let entities = state.service.find_all().await?;
    Ok(Json(entities.iter().map(T::to_response).collect()))
}

pub async fn get_resource<T: ResourceMapper>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> ApiResult<Json<T::Response>> {
    let id = parse_id(&id)?;
    let entity = state.service.find_by_id(id).await?;
    Ok(Json(entity.to_response()))
}

pub async fn create_resource<T: ResourceMapper>(
    State(state): State<ResourceState<T>>,
    ValidatedJson(request): ValidatedJson<T::Request>,
) -> ApiResult<(StatusCode, Json<T::Response>)> {
    let created = state.service.save(T::from_request(request)).await?;
    tracing::info!(
        entity = T::ENTITY_NAME,
        id = created.id().unwrap_or_default(),
        "created"
    );
    Ok((StatusCode::CREATED, Json(created.to_response())))
}

/// Load the current value, apply the request onto it, then update
pub async fn update_resource<T: ResourceMapper>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<T::Request>,
) -> ApiResult<Json<T::Response>> {
    let id = parse_id(&id)?;
    let mut entity = state.service.find_by_id(id).await?;
    entity.merge_request(request);
    let updated = state.service.update(entity, id).await?;
    Ok(Json(updated.to_response()))
}

pub async fn delete_resource<T: ResourceMapper>(
    State(state): State<ResourceState<T>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.service.delete_by_id(id).await?;
    tracing::info!(entity = T::ENTITY_NAME, id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
