mod backend;
mod config;
mod page;
mod records;
mod uploads;

use crate::backend::BackendError;
use crate::config::CONFIG;
use crate::page::{RenderResult, Site};
use actix_web::error::BlockingError;
use actix_web::http::header::LOCATION;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use std::sync::LazyLock;

const VERSION: &str = env!("CARGO_PKG_VERSION");

static CSS: &str = include_str!("../data/gallery.css");
static FAVICON: &[u8] = include_bytes!("../data/favicon.ico");

static SITE: LazyLock<Site> = LazyLock::new(|| Site {
    title: CONFIG.title.clone(),
    root: if CONFIG.base_path.is_empty() { String::new() } else { format!("/{}", CONFIG.base_path) },
});

fn html(page: RenderResult) -> HttpResponse {
    match page {
        Ok(body) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body),
        Err(e) => {
            log::error!("template rendering failed: {e}");
            HttpResponse::InternalServerError().body("template rendering failed")
        }
    }
}

/// Collapses a fetch result into records plus an optional user notice.
/// A failed fetch renders an empty page section with a toast, never an
/// error page, and is not retried.
fn fetched<T>(result: Result<Result<Vec<T>, BackendError>, BlockingError>, what: &str) -> (Vec<T>, Option<&'static str>) {
    const NOTICE: &str = "The gallery backend is currently unavailable.";
    match result {
        Ok(Ok(records)) => (records, None),
        Ok(Err(e)) => {
            log::error!("fetching {what} failed: {e}");
            (Vec::new(), Some(NOTICE))
        }
        Err(e) => {
            log::error!("fetching {what} was cancelled: {e}");
            (Vec::new(), Some(NOTICE))
        }
    }
}

#[get("gallery.css")]
async fn css() -> impl Responder {
    HttpResponse::Ok().content_type("text/css").body(CSS)
}

#[get("favicon.ico")]
async fn favicon() -> impl Responder {
    HttpResponse::Ok().content_type("image/x-icon").body(FAVICON)
}

#[get("login")]
async fn login_form() -> impl Responder {
    html(page::login(&SITE, None))
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

#[post("login")]
async fn login_submit(form: web::Form<LoginForm>) -> impl Responder {
    let LoginForm { username, password } = form.into_inner();
    match web::block(move || backend::login(&username, &password)).await {
        Ok(Ok(true)) => HttpResponse::SeeOther()
            .insert_header((LOCATION, format!("{}/albums", SITE.root)))
            .finish(),
        Ok(Ok(false)) => html(page::login(&SITE, Some("Invalid credentials"))),
        Ok(Err(e)) => {
            log::error!("login request failed: {e}");
            html(page::login(&SITE, Some("Network error")))
        }
        Err(e) => {
            log::error!("login request was cancelled: {e}");
            html(page::login(&SITE, Some("Network error")))
        }
    }
}

#[get("albums")]
async fn albums() -> impl Responder {
    let (records, notice) = fetched(web::block(backend::albums).await, "albums");
    html(page::albums(&SITE, &records, notice))
}

#[derive(Deserialize)]
struct AlbumQuery {
    id: i64,
}

#[get("albumImage")]
async fn album_images(query: web::Query<AlbumQuery>) -> impl Responder {
    let id = query.id;
    let (records, notice) = fetched(web::block(move || backend::album_images(id)).await, "album images");
    html(page::album_images(&SITE, &CONFIG.backend_url, &records, notice))
}

#[get("gallery")]
async fn gallery() -> impl Responder {
    let (records, notice) = fetched(web::block(backend::images).await, "gallery images");
    html(page::gallery(&SITE, &CONFIG.backend_url, &records, notice))
}

#[get("admin")]
async fn admin() -> impl Responder {
    let (records, notice) = fetched(web::block(backend::users).await, "users");
    html(page::admin(&SITE, &records, notice))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!(
        "fotolab {VERSION} listening on http://{}:{}{}/ with backend {}",
        CONFIG.addr,
        CONFIG.port,
        SITE.root,
        CONFIG.backend_url
    );
    HttpServer::new(|| {
        App::new()
            .service(
                web::scope(&CONFIG.base_path)
                    .service(css)
                    .service(favicon)
                    .service(login_form)
                    .service(login_submit)
                    .service(albums)
                    .service(album_images)
                    .service(gallery)
                    .service(admin),
            )
            .service(web::redirect("/", format!("{}/albums", SITE.root)))
    })
    .bind((CONFIG.addr.as_str(), CONFIG.port))?
    .run()
    .await
}
