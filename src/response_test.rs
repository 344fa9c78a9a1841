use super::*;

mod json {
    use super::*;

    #[test]
    fn should_carry_fixed_json_headers() {
        // Act
        let response = Response::json(200, json!({ "ok": true }));

        // Assert
        assert_eq!(response.status, 200);
        assert_eq!(
            response.headers.get(header::CONTENT_TYPE),
            Some(content_type::JSON)
        );
        assert_eq!(response.headers.get(header::CACHE_CONTROL), Some("no-store"));
        assert_eq!(
            response.headers.get(header::X_CONTENT_TYPE_OPTIONS),
            Some("nosniff")
        );
    }
}

mod json_head {
    use super::*;

    #[test]
    fn should_have_json_headers_and_empty_body() {
        // Act
        let response = Response::json_head(200);

        // Assert
        assert_eq!(response.body, Body::Empty);
        assert_eq!(
            response.headers.get(header::CONTENT_TYPE),
            Some(content_type::JSON)
        );
        assert!(response.body_bytes().is_empty());
    }
}

mod error {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn should_use_status_dictated_by_code() {
        // Act
        let response = Response::error(ErrorCode::NotFound, "No route for /nope");

        // Assert
        assert_eq!(response.status, 404);
        assert_eq!(
            response.body,
            Body::Json(json!({ "code": "NOT_FOUND", "message": "No route for /nope" }))
        );
    }

    #[test]
    fn should_append_extra_field_given_with_field() {
        // Act
        let response =
            Response::error(ErrorCode::CorsHeaderNotAllowed, "Header X-Foo is not allowed")
                .with_field("header", "X-Foo");

        // Assert
        assert_eq!(
            response.body,
            Body::Json(json!({
                "code": "CORS_HEADER_NOT_ALLOWED",
                "message": "Header X-Foo is not allowed",
                "header": "X-Foo",
            }))
        );
    }
}

mod text {
    use super::*;

    #[test]
    fn should_set_plain_text_content_type() {
        // Act
        let response = Response::text(200, "203.0.113.7");

        // Assert
        assert_eq!(
            response.headers.get(header::CONTENT_TYPE),
            Some(content_type::TEXT)
        );
        assert_eq!(response.body_bytes(), b"203.0.113.7");
    }
}

mod no_content {
    use super::*;

    #[test]
    fn should_be_bodyless_204_without_headers() {
        // Act
        let response = Response::no_content();

        // Assert
        assert_eq!(response.status, 204);
        assert!(response.headers.is_empty());
        assert_eq!(response.body, Body::Empty);
    }
}
