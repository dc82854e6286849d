use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_pokemon::list::PokemonListResponse;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::a001_pokemon::error::CatalogError;
use crate::domain::a001_pokemon::service::{normalize_limit, PokemonService};

#[derive(Debug, Default, Deserialize)]
pub struct PokemonListParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// GET /api/pokemon/list
pub async fn list_paginated(
    State(service): State<Arc<PokemonService>>,
    Query(params): Query<PokemonListParams>,
) -> Result<Json<PokemonListResponse>, CatalogError> {
    let limit = normalize_limit(params.limit);
    let offset = params.offset.unwrap_or(0);

    let items = service.list_page(limit, offset).await?;
    Ok(Json(PokemonListResponse {
        items,
        limit,
        offset,
    }))
}

/// GET /api/pokemon/:id
pub async fn get_by_id(
    State(service): State<Arc<PokemonService>>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    match service.get_by_id(&id).await? {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pokemon::service::tests::{sample_catalog, StaticRepository};

    fn service(repo: StaticRepository) -> Arc<PokemonService> {
        Arc::new(PokemonService::new(Arc::new(repo)))
    }

    #[tokio::test]
    async fn test_list_defaults_to_first_page() {
        let svc = service(StaticRepository::new(sample_catalog()));
        let Json(body) = list_paginated(State(svc), Query(PokemonListParams::default()))
            .await
            .unwrap();
        assert_eq!(body.limit, 20);
        assert_eq!(body.offset, 0);
        assert_eq!(body.items.len(), 20);
        assert_eq!(body.items[0].number, 1);
    }

    #[tokio::test]
    async fn test_full_scan_limit_returns_whole_catalog() {
        let svc = service(StaticRepository::new(sample_catalog()));
        let params = PokemonListParams {
            limit: Some(160),
            offset: Some(0),
        };
        let Json(body) = list_paginated(State(svc), Query(params)).await.unwrap();
        assert_eq!(body.items.len(), 45);
    }

    #[tokio::test]
    async fn test_detail_statuses() {
        let svc = service(StaticRepository::new(sample_catalog()));

        let ok = get_by_id(State(svc.clone()), Path("3".to_string()))
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);

        let missing = get_by_id(State(svc.clone()), Path("500".to_string()))
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let invalid = get_by_id(State(svc), Path("abc".to_string())).await.unwrap();
        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upstream_failure_maps_to_bad_gateway() {
        let svc = service(StaticRepository::failing());
        let err = list_paginated(State(svc), Query(PokemonListParams::default()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
