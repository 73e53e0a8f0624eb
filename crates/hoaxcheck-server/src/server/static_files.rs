use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "web/"]
struct WebAssets;

/// Serve the embedded single-page UI
pub async fn serve_static(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if !path.is_empty() {
        if let Some(content) = <WebAssets as Embed>::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.into_owned(),
            )
                .into_response();
        }
    }

    // Any other route gets the page itself
    if let Some(content) = <WebAssets as Embed>::get("index.html") {
        return Html(String::from_utf8_lossy(&content.data).to_string()).into_response();
    }

    Html(FALLBACK_HTML).into_response()
}

const FALLBACK_HTML: &str = r#"<!DOCTYPE html>
<html lang="id">
<head><meta charset="UTF-8"><title>Identifikasi Hoax Indonesia</title></head>
<body>
<p>UI assets are missing from this build. The detection API is available at
<code>POST /api/detect/berita</code> and <code>POST /api/detect/sosmed</code>.</p>
</body>
</html>
"#;
