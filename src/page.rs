//! Builds HTML pages from backend records.
//!
//! Every interpolated value goes through tinytemplate's default formatter,
//! which escapes HTML-significant characters. Record fields are untrusted
//! third-party input (usernames, titles), so no template may switch to the
//! unescaped formatter for them.

use crate::records::{Album, AlbumImage, GalleryImage, User};
use crate::uploads::resolve_url;
use serde::Serialize;
use tinytemplate::TinyTemplate;

static LOGIN: &str = include_str!("../data/login.html");
static ALBUMS: &str = include_str!("../data/albums.html");
static ALBUM_IMAGES: &str = include_str!("../data/album_images.html");
static GALLERY: &str = include_str!("../data/gallery.html");
static ADMIN: &str = include_str!("../data/admin.html");

pub type RenderResult = Result<String, tinytemplate::error::Error>;

/// Values every page template needs besides its records.
#[derive(Serialize)]
pub struct Site {
    pub title: String,
    /// Link prefix, either empty or "/<base_path>".
    pub root: String,
}

/// The engine's formatter boxes are not `Sync`, so the registry is rebuilt
/// per render instead of living in a shared static.
fn templates() -> Result<TinyTemplate<'static>, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("login", LOGIN)?;
    tt.add_template("albums", ALBUMS)?;
    tt.add_template("album_images", ALBUM_IMAGES)?;
    tt.add_template("gallery", GALLERY)?;
    tt.add_template("admin", ADMIN)?;
    Ok(tt)
}

#[derive(Serialize)]
struct LoginContext<'a> {
    site: &'a Site,
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct AlbumsContext<'a> {
    site: &'a Site,
    albums: &'a [Album],
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct ImageCard {
    url: String,
    title: String,
}

#[derive(Serialize)]
struct ImagesContext<'a> {
    site: &'a Site,
    images: Vec<ImageCard>,
    notice: Option<&'a str>,
}

#[derive(Serialize)]
struct AdminContext<'a> {
    site: &'a Site,
    users: &'a [User],
    notice: Option<&'a str>,
}

pub fn login(site: &Site, notice: Option<&str>) -> RenderResult {
    templates()?.render("login", &LoginContext { site, notice })
}

pub fn albums(site: &Site, albums: &[Album], notice: Option<&str>) -> RenderResult {
    templates()?.render("albums", &AlbumsContext { site, albums, notice })
}

pub fn album_images(site: &Site, base: &str, images: &[AlbumImage], notice: Option<&str>) -> RenderResult {
    let images = images
        .iter()
        .map(|img| ImageCard { url: resolve_url(&img.path, base), title: img.title.clone() })
        .collect();
    templates()?.render("album_images", &ImagesContext { site, images, notice })
}

pub fn gallery(site: &Site, base: &str, images: &[GalleryImage], notice: Option<&str>) -> RenderResult {
    let images = images
        .iter()
        .map(|img| ImageCard { url: resolve_url(&img.path, base), title: String::new() })
        .collect();
    templates()?.render("gallery", &ImagesContext { site, images, notice })
}

pub fn admin(site: &Site, users: &[User], notice: Option<&str>) -> RenderResult {
    templates()?.render("admin", &AdminContext { site, users, notice })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_site() -> Site {
        Site { title: "Fotolab".to_owned(), root: String::new() }
    }

    #[test]
    fn album_card_links_to_its_image_page() {
        let list = vec![Album { id: 7, name: "Trip".to_owned() }];
        let html = albums(&test_site(), &list, None).unwrap();
        assert_eq!(html.matches("card bg-dark border-secondary").count(), 1);
        assert!(html.contains("/albumImage?id=7"));
        assert!(html.contains("Trip"));
    }

    #[test]
    fn records_render_in_backend_order() {
        let list = vec![
            Album { id: 1, name: "Alps".to_owned() },
            Album { id: 2, name: "Beach".to_owned() },
            Album { id: 3, name: "City".to_owned() },
        ];
        let html = albums(&test_site(), &list, None).unwrap();
        assert_eq!(html.matches("card-title").count(), 3);
        let alps = html.find("Alps").unwrap();
        let beach = html.find("Beach").unwrap();
        let city = html.find("City").unwrap();
        assert!(alps < beach && beach < city);
    }

    #[test]
    fn empty_collection_renders_no_items() {
        let html = albums(&test_site(), &[], None).unwrap();
        assert_eq!(html.matches("card-title").count(), 0);
        let html = admin(&test_site(), &[], None).unwrap();
        assert_eq!(html.matches("<tr>").count(), 1); // header row only
    }

    #[test]
    fn hostile_fields_are_neutralized() {
        let users = vec![User {
            username: "<img src=x onerror=alert(1)>".to_owned(),
            role: "\"><script>evil()</script>".to_owned(),
        }];
        let html = admin(&test_site(), &users, None).unwrap();
        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn hostile_image_title_cannot_break_out_of_the_attribute() {
        let images = vec![AlbumImage {
            path: "a.png".to_owned(),
            title: "\"><script>evil()</script>".to_owned(),
        }];
        let html = album_images(&test_site(), "http://api", &images, None).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("http://api/uploads/a.png"));
    }

    #[test]
    fn gallery_resolves_stored_paths() {
        let images = vec![
            GalleryImage { path: "local/sub/photo.png".to_owned() },
            GalleryImage { path: "http://cdn.example/a.png".to_owned() },
        ];
        let html = gallery(&test_site(), "http://api", &images, None).unwrap();
        assert!(html.contains("http://api/uploads/photo.png"));
        assert!(html.contains("http://cdn.example/a.png"));
    }

    #[test]
    fn fetch_failure_notice_is_shown() {
        let html = albums(&test_site(), &[], Some("The gallery backend is currently unavailable.")).unwrap();
        assert!(html.contains("The gallery backend is currently unavailable."));
        assert!(html.contains("toast"));
    }

    #[test]
    fn no_notice_means_no_toast() {
        let html = login(&test_site(), None).unwrap();
        assert!(!html.contains("toast-body"));
        let html = login(&test_site(), Some("Invalid credentials")).unwrap();
        assert!(html.contains("Invalid credentials"));
    }
}
