use std::path::Path;

use tokio::io::AsyncReadExt;

use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};

pub fn root() -> Response {
    Response::empty(StatusCode::Ok)
}

/// Echoes the `User-Agent` header back, empty if the client sent none.
pub fn user_agent(req: &Request) -> Response {
    Response::text(req.user_agent())
}

pub fn echo(capture: &str) -> Response {
    Response::text(capture)
}

pub fn not_found() -> Response {
    Response::not_found()
}

/// Rejects names that could step outside the base directory.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && name != "." && !name.contains("..") && !name.contains(['/', '\\'])
}

/// Serves `<directory>/<name>` as raw bytes.
///
/// Open failure maps to 404, a failing stat or read to 500. The whole file is
/// read into memory before anything is sent.
pub async fn file(directory: &Path, name: &str) -> Response {
    if !is_safe_filename(name) {
        tracing::warn!(file = name, "Rejecting file name");
        return Response::not_found();
    }

    let path = directory.join(name);

    let mut file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Error opening file");
            return Response::not_found();
        }
    };

    let size = match file.metadata().await {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error getting file info");
            return Response::internal_error();
        }
    };

    let mut contents = Vec::with_capacity(usize::try_from(size).unwrap_or_default());
    if let Err(e) = file.read_to_end(&mut contents).await {
        tracing::error!(path = %path.display(), error = %e, "Error reading file");
        return Response::internal_error();
    }

    Response::octet_stream(contents)
}
