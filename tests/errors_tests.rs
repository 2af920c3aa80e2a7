use actix_web::http::StatusCode;
use shortlink::errors::{Result, ShortlinkError};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ShortlinkError::validation("Invalid URL format.");

        assert!(matches!(error, ShortlinkError::Validation(_)));
        assert_eq!(error.code(), "E001");
        assert_eq!(error.message(), "Invalid URL format.");
        assert!(error.to_string().contains("Validation Error"));
    }

    #[test]
    fn test_conflict_error() {
        let error = ShortlinkError::conflict("Custom short URL already taken.");

        assert!(matches!(error, ShortlinkError::Conflict(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Custom short URL already taken."));
    }

    #[test]
    fn test_not_found_error() {
        let error = ShortlinkError::not_found("Short link not found.");

        assert!(matches!(error, ShortlinkError::NotFound(_)));
        assert_eq!(error.error_type(), "Resource Not Found");
    }

    #[test]
    fn test_database_errors() {
        let config = ShortlinkError::database_config("bad url");
        let connection = ShortlinkError::database_connection("refused");
        let operation = ShortlinkError::database_operation("disk full");

        assert_eq!(config.code(), "E004");
        assert_eq!(connection.code(), "E005");
        assert_eq!(operation.code(), "E006");
        assert!(operation.to_string().contains("disk full"));
    }

    #[test]
    fn test_internal_error() {
        let error = ShortlinkError::internal("ran out of codes");
        assert_eq!(error.code(), "E009");
        assert_eq!(error.format_simple(), "Internal Error: ran out of codes");
    }
}

#[cfg(test)]
mod http_mapping_tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert_eq!(
            ShortlinkError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShortlinkError::conflict("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShortlinkError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert!(!ShortlinkError::conflict("x").is_internal());
    }

    #[test]
    fn test_internal_errors() {
        let errors = [
            ShortlinkError::database_config("x"),
            ShortlinkError::database_connection("x"),
            ShortlinkError::database_operation("x"),
            ShortlinkError::file_operation("x"),
            ShortlinkError::serialization("x"),
            ShortlinkError::internal("x"),
        ];

        for error in errors {
            assert_eq!(error.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert!(error.is_internal());
        }
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let error: ShortlinkError = io_error.into();

        assert!(matches!(error, ShortlinkError::FileOperation(_)));
        assert!(error.message().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ShortlinkError = json_error.into();

        assert!(matches!(error, ShortlinkError::Serialization(_)));
    }

    #[test]
    fn test_db_error_conversion() {
        let db_error = sea_orm::DbErr::Custom("boom".to_string());
        let error: ShortlinkError = db_error.into();

        assert!(matches!(error, ShortlinkError::DatabaseOperation(_)));
        assert!(error.message().contains("boom"));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.txt")?)
        }

        let err = read_missing().unwrap_err();
        assert!(matches!(err, ShortlinkError::FileOperation(_)));
    }

    #[test]
    fn test_is_std_error() {
        let error = ShortlinkError::internal("x");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
    }
}

#[cfg(test)]
mod formatting_tests {
    use super::*;

    #[test]
    fn test_format_colored_contains_parts() {
        colored::control::set_override(false);
        let output = ShortlinkError::not_found("Short link not found.").format_colored();

        assert!(output.contains("[ERROR]"));
        assert!(output.contains("E003"));
        assert!(output.contains("Short link not found."));
    }
}
