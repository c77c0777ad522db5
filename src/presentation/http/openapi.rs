// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::{Path, PathBuf}};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::list_categories,
        crate::presentation::http::controllers::navigation::search,
        crate::presentation::http::controllers::navigation::category,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::navigation::Page,
            crate::application::dto::ListingView,
            crate::application::dto::ListingContent,
            crate::application::dto::ArticleCardView,
            crate::application::dto::FilterButtonView,
            crate::application::dto::PageControlsView,
            crate::application::dto::PageButton,
            crate::application::dto::PageItem,
            crate::application::dto::ArticleView,
            crate::application::dto::ArticleDetailView,
            crate::application::dto::ArticleHeaderView,
            crate::application::dto::ArticleNotFoundView,
            crate::application::dto::NotFoundReason,
            crate::application::dto::IdentifierKind,
            crate::application::dto::LinkView,
            crate::application::dto::ProductView,
            crate::application::dto::ProductsSectionView,
            crate::application::dto::CategoryDto,
            crate::application::dto::NavigationTarget
        )
    ),
    tags(
        (name = "Articles", description = "Article listing, lookup and categories"),
        (name = "Navigation", description = "Where search and category inputs lead"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Haven Browse API",
        description = "Browsing engine for a static article site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi);
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` (default
/// `spec/openapi.json`) and returns the path written.
pub fn write_openapi_snapshot() -> std::io::Result<PathBuf> {
    let path = env::var_os("OPENAPI_SNAPSHOT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("spec/openapi.json"));
    write_openapi_snapshot_to(&path)?;
    Ok(path)
}

pub fn write_openapi_snapshot_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_public_route() {
        let spec = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/v1/articles",
            "/api/v1/article",
            "/api/v1/categories",
            "/api/v1/navigation/search",
            "/api/v1/navigation/category",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn snapshot_lands_at_the_given_path() {
        let dir = env::temp_dir().join(format!("haven-openapi-{}", std::process::id()));
        let path = dir.join("nested").join("openapi.json");

        write_openapi_snapshot_to(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert!(written["paths"]["/api/v1/article"].is_object());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
