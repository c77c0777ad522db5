// src/presentation/http/controllers/navigation.rs
use crate::application::{
    dto::NavigationTarget,
    navigation::{self, Page},
};
use crate::domain::article::CategoryFilter;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use axum::{Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchNavigationParams {
    /// Page the search box was used on.
    #[serde(default)]
    pub page: Page,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryNavigationParams {
    /// Page the category link was used on.
    #[serde(default)]
    pub page: Page,
    #[serde(default)]
    pub category: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/navigation/search",
    params(SearchNavigationParams),
    responses(
        (status = 200, description = "Where a search submission leads.", body = NavigationTarget)
    ),
    tag = "Navigation"
)]
pub async fn search(
    Query(params): Query<SearchNavigationParams>,
) -> HttpResult<Json<NavigationTarget>> {
    navigation::search_navigation(params.page, &params.q)
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/navigation/category",
    params(CategoryNavigationParams),
    responses(
        (status = 200, description = "Where a category selection leads.", body = NavigationTarget)
    ),
    tag = "Navigation"
)]
pub async fn category(
    Query(params): Query<CategoryNavigationParams>,
) -> HttpResult<Json<NavigationTarget>> {
    let filter = CategoryFilter::parse(&params.category);
    navigation::category_navigation(params.page, &filter)
        .into_http()
        .map(Json)
}
