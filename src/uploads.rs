//! Resolution of stored image paths to fetchable URLs.

/// Turns a stored upload path into the URL a browser can fetch it from.
///
/// Paths that already carry a scheme pass through unchanged. Anything else
/// is reduced to its final path segment and served from the backend's
/// static `/uploads/` route. An empty path resolves to the bare uploads
/// directory and shows up as a broken image rather than an error.
pub fn resolve_url(path: &str, base: &str) -> String {
    if path.starts_with("http") {
        return path.to_owned();
    }
    let filename = match path.rsplit_once('/') {
        Some((_, name)) => name,
        None => path,
    };
    format!("{base}/uploads/{filename}")
}

#[cfg(test)]
mod tests {
    use super::resolve_url;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(resolve_url("http://cdn.example/a.png", "http://api"), "http://cdn.example/a.png");
        assert_eq!(resolve_url("https://cdn.example/b.jpg", "http://api"), "https://cdn.example/b.jpg");
    }

    #[test]
    fn relative_paths_join_the_uploads_route() {
        assert_eq!(resolve_url("photo.png", "http://api"), "http://api/uploads/photo.png");
    }

    #[test]
    fn nested_paths_keep_only_the_filename() {
        assert_eq!(resolve_url("local/sub/photo.png", "http://api"), "http://api/uploads/photo.png");
    }

    #[test]
    fn empty_path_yields_a_best_effort_url() {
        assert_eq!(resolve_url("", "http://api"), "http://api/uploads/");
    }
}
