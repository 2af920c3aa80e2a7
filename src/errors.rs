use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortlinkError {
    Validation(String),
    Conflict(String),
    NotFound(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Serialization(String),
    Internal(String),
}

impl ShortlinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortlinkError::Validation(_) => "E001",
            ShortlinkError::Conflict(_) => "E002",
            ShortlinkError::NotFound(_) => "E003",
            ShortlinkError::DatabaseConfig(_) => "E004",
            ShortlinkError::DatabaseConnection(_) => "E005",
            ShortlinkError::DatabaseOperation(_) => "E006",
            ShortlinkError::FileOperation(_) => "E007",
            ShortlinkError::Serialization(_) => "E008",
            ShortlinkError::Internal(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortlinkError::Validation(_) => "Validation Error",
            ShortlinkError::Conflict(_) => "Conflict Error",
            ShortlinkError::NotFound(_) => "Resource Not Found",
            ShortlinkError::DatabaseConfig(_) => "Database Configuration Error",
            ShortlinkError::DatabaseConnection(_) => "Database Connection Error",
            ShortlinkError::DatabaseOperation(_) => "Database Operation Error",
            ShortlinkError::FileOperation(_) => "File Operation Error",
            ShortlinkError::Serialization(_) => "Serialization Error",
            ShortlinkError::Internal(_) => "Internal Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortlinkError::Validation(msg)
            | ShortlinkError::Conflict(msg)
            | ShortlinkError::NotFound(msg)
            | ShortlinkError::DatabaseConfig(msg)
            | ShortlinkError::DatabaseConnection(msg)
            | ShortlinkError::DatabaseOperation(msg)
            | ShortlinkError::FileOperation(msg)
            | ShortlinkError::Serialization(msg)
            | ShortlinkError::Internal(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    ///
    /// Uniqueness conflicts are reported as 400, the same as malformed input.
    pub fn http_status(&self) -> StatusCode {
        match self {
            ShortlinkError::Validation(_) | ShortlinkError::Conflict(_) => StatusCode::BAD_REQUEST,
            ShortlinkError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Store or unexpected failures, as opposed to errors caused by the request.
    pub fn is_internal(&self) -> bool {
        self.http_status() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortlinkError {}

// 便捷的构造函数
impl ShortlinkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Validation(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::NotFound(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Serialization(msg.into())
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        ShortlinkError::Internal(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ShortlinkError {
    fn from(err: sea_orm::DbErr) -> Self {
        ShortlinkError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ShortlinkError {
    fn from(err: std::io::Error) -> Self {
        ShortlinkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShortlinkError {
    fn from(err: serde_json::Error) -> Self {
        ShortlinkError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortlinkError>;
