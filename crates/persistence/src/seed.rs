//! First-run content.
//!
//! Each table is seeded only while it is empty, inside its own transaction, so
//! repeated calls never duplicate rows and a failure never leaves half a seed.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use tracing::info;

use domain::models::{NewProject, NewService, NewSkill, NewTestimonial};

use crate::repositories::{project, service, skill, testimonial};

/// Number of rows inserted per table by one [`seed_if_empty`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: usize,
    pub services: usize,
    pub skills: usize,
    pub testimonials: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.projects + self.services + self.skills + self.testimonials
    }
}

/// Default projects, oldest first.
pub fn default_projects() -> Vec<NewProject> {
    vec![
        NewProject::new(
            "Task Tracker CLI",
            "A terminal task manager with tagging, due dates and a local SQLite store.",
            "Rust, Clap, SQLite",
        )
        .with_github_link("https://github.com/example/task-tracker"),
        NewProject::new(
            "Weather Dashboard",
            "Live forecasts and historical charts pulled from a public weather API.",
            "JavaScript, Vue.js, Chart.js",
        )
        .with_github_link("https://github.com/example/weather-dashboard")
        .with_live_link("https://weather.example.com"),
        NewProject::new(
            "Portfolio Website",
            "This site: projects, services, skills and a contact form that emails the owner.",
            "Rust, Axum, SQLite",
        )
        .with_github_link("https://github.com/example/portfolio")
        .with_image("img/portfolio.png"),
    ]
}

/// Default services, in display order.
pub fn default_services() -> Vec<NewService> {
    vec![
        NewService::new(
            "Web Development",
            "Responsive websites and web applications built end to end.",
        )
        .with_icon("bi-code-slash")
        .with_price_range("$300 - $1500"),
        NewService::new(
            "Backend & APIs",
            "REST APIs, databases and integrations that stay fast under load.",
        )
        .with_icon("bi-server")
        .with_price_range("$400 - $2000"),
        NewService::new(
            "Data Analysis",
            "Cleaning, exploring and visualising data to answer concrete questions.",
        )
        .with_icon("bi-bar-chart-line"),
        NewService::new(
            "Consulting",
            "Architecture reviews and code audits for small teams.",
        )
        .with_icon("bi-lightbulb"),
    ]
}

/// Default skills.
pub fn default_skills() -> Vec<NewSkill> {
    vec![
        NewSkill::new("Python", 90),
        NewSkill::new("Rust", 80),
        NewSkill::new("JavaScript", 85),
        NewSkill::new("SQL", 75),
        NewSkill::new("HTML & CSS", 88),
        NewSkill::new("Vue.js", 70),
        NewSkill::new("Git", 82),
        NewSkill::new("Problem Solving", 92).with_category("Soft"),
    ]
}

/// Default testimonials, oldest first.
pub fn default_testimonials() -> Vec<NewTestimonial> {
    vec![
        NewTestimonial::new(
            "Priya Sharma",
            "Delivered our landing page ahead of schedule and explained every decision.",
        )
        .with_role("Startup Founder"),
        NewTestimonial::new(
            "Rahul Verma",
            "Clean, well-tested API work. Would happily work together again.",
        )
        .with_role("Engineering Lead")
        .with_rating(5),
        NewTestimonial::new(
            "Emily Chen",
            "Great communication and a dashboard our whole team actually uses.",
        )
        .with_role("Product Manager")
        .with_rating(4),
    ]
}

/// Inserts the default rows into every table that is currently empty.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedReport, sqlx::Error> {
    let report = SeedReport {
        projects: seed_projects(pool).await?,
        services: seed_services(pool).await?,
        skills: seed_skills(pool).await?,
        testimonials: seed_testimonials(pool).await?,
    };

    if report.total() > 0 {
        info!(
            projects = report.projects,
            services = report.services,
            skills = report.skills,
            testimonials = report.testimonials,
            "Seeded empty tables with default content"
        );
    }

    Ok(report)
}

async fn seed_projects(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;
    if project::count(&mut *tx).await? > 0 {
        return Ok(0);
    }

    let rows = default_projects();
    let base = Utc::now() - Duration::seconds(rows.len() as i64);
    for (offset, row) in rows.iter().enumerate() {
        project::insert(&mut *tx, row, base + Duration::seconds(offset as i64)).await?;
    }

    tx.commit().await?;
    Ok(rows.len())
}

async fn seed_services(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;
    if service::count(&mut *tx).await? > 0 {
        return Ok(0);
    }

    let rows = default_services();
    for row in &rows {
        service::insert(&mut *tx, row).await?;
    }

    tx.commit().await?;
    Ok(rows.len())
}

async fn seed_skills(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;
    if skill::count(&mut *tx).await? > 0 {
        return Ok(0);
    }

    let rows = default_skills();
    for row in &rows {
        skill::insert(&mut *tx, row).await?;
    }

    tx.commit().await?;
    Ok(rows.len())
}

async fn seed_testimonials(pool: &SqlitePool) -> Result<usize, sqlx::Error> {
    let mut tx = pool.begin().await?;
    if testimonial::count(&mut *tx).await? > 0 {
        return Ok(0);
    }

    let rows = default_testimonials();
    let base = Utc::now() - Duration::seconds(rows.len() as i64);
    for (offset, row) in rows.iter().enumerate() {
        testimonial::insert(&mut *tx, row, base + Duration::seconds(offset as i64)).await?;
    }

    tx.commit().await?;
    Ok(rows.len())
}
