//! Portfolio content endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SignedCookieJar};
use domain::models::{FlashKind, FlashMessage, Project, Service, Skill, Testimonial};
use persistence::repositories::{
    ProjectRepository, ServiceRepository, SkillRepository, TestimonialRepository,
};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::contact::FLASH_COOKIE;

/// Everything the landing page renders.
#[derive(Debug, Serialize)]
pub struct PortfolioPage {
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
    pub skills: Vec<Skill>,
    pub testimonials: Vec<Testimonial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<FlashMessage>,
}

async fn load_projects(state: &AppState) -> Result<Vec<Project>, sqlx::Error> {
    let entities = ProjectRepository::new(state.pool.clone()).list_all().await?;
    Ok(entities.into_iter().map(Into::into).collect())
}

async fn load_services(state: &AppState) -> Result<Vec<Service>, sqlx::Error> {
    let entities = ServiceRepository::new(state.pool.clone()).list_all().await?;
    Ok(entities.into_iter().map(Into::into).collect())
}

async fn load_skills(state: &AppState) -> Result<Vec<Skill>, sqlx::Error> {
    let entities = SkillRepository::new(state.pool.clone()).list_all().await?;
    Ok(entities.into_iter().map(Into::into).collect())
}

async fn load_testimonials(state: &AppState) -> Result<Vec<Testimonial>, sqlx::Error> {
    let entities = TestimonialRepository::new(state.pool.clone())
        .list_approved()
        .await?;
    Ok(entities.into_iter().map(Into::into).collect())
}

/// Landing page payload.
///
/// GET /
///
/// A pending flash message is returned once and the cookie is cleared.
/// A flash cookie that fails verification is cleared too, without a message.
pub async fn index(
    State(state): State<AppState>,
    raw: CookieJar,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Json<PortfolioPage>), ApiError> {
    let flash = jar
        .get(FLASH_COOKIE)
        .and_then(|cookie| FlashKind::parse(cookie.value()))
        .map(|kind| kind.message());

    // `raw` sees the cookie whether or not the signature checks out.
    let jar = if raw.get(FLASH_COOKIE).is_some() {
        jar.remove(Cookie::build(FLASH_COOKIE).path("/"))
    } else {
        jar
    };

    let page = PortfolioPage {
        projects: load_projects(&state).await?,
        services: load_services(&state).await?,
        skills: load_skills(&state).await?,
        testimonials: load_testimonials(&state).await?,
        flash,
    };

    Ok((jar, Json(page)))
}

/// GET /api/projects
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(load_projects(&state).await?))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, ApiError> {
    let project = ProjectRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Project {} not found", id)))?;

    Ok(Json(project.into()))
}

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, ApiError> {
    Ok(Json(load_services(&state).await?))
}

/// GET /api/skills
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    Ok(Json(load_skills(&state).await?))
}

/// GET /api/testimonials
///
/// Approved testimonials only, newest first.
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    Ok(Json(load_testimonials(&state).await?))
}
