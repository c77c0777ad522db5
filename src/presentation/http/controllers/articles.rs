// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::{ArticleView, CategoryDto, ListingView},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Category key, or `all`.
    #[serde(default)]
    pub category: Option<String>,
    /// Free text matched against title, excerpt and content.
    #[serde(default)]
    pub search: Option<String>,
    /// 1-based page number. Blank or non-numeric input selects page 1.
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleLookupParams {
    /// Article slug.
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy numeric id, used only when `name` is absent.
    #[serde(default)]
    pub id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Listing view for the requested filter, search and page.", body = ListingView),
        (status = 503, description = "Article data still loading.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ListingView>> {
    let store = state.ready_store().await.into_http()?;
    state
        .services
        .article_queries
        .list_articles(
            &store,
            ListArticlesQuery {
                category: params.category,
                search: params.search,
                page: params.page,
            },
        )
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/article",
    params(ArticleLookupParams),
    responses(
        (status = 200, description = "Article detail view.", body = ArticleView),
        (status = 404, description = "Not-found view; distinguishes a missing identifier from an unmatched one.", body = ArticleView),
        (status = 503, description = "Article data still loading.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleLookupParams>,
) -> HttpResult<(StatusCode, Json<ArticleView>)> {
    let store = state.ready_store().await.into_http()?;
    let view = state
        .services
        .article_queries
        .get_article(
            &store,
            GetArticleQuery {
                name: params.name,
                id: params.id,
            },
        )
        .into_http()?;

    let status = if view.is_found() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    Ok((status, Json(view)))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "Category catalog in display order.", body = [CategoryDto]),
        (status = 503, description = "Article data still loading.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    let store = state.ready_store().await.into_http()?;
    Ok(Json(state.services.article_queries.list_categories(&store)))
}
