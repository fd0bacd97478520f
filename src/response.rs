//! Response helpers for the HTML surface.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 302 redirect, the status browsers expect after an HTML form submission.
pub fn redirect(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_is_302_with_location() {
        let response = redirect("/catalog/authors");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/catalog/authors"
        );
    }
}
