use thiserror::Error;

#[derive(Error, Debug)]
pub enum FootprintError {
    #[error("Travel config not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Travel config '{path}' is malformed: {message}")]
    ConfigParse { path: String, message: String },

    #[error("Unknown map type: {map_type}")]
    UnknownMapType { map_type: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl FootprintError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigParse { .. }
            | Self::SettingsError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::UnknownMapType { .. } | Self::SerializationError(_) => ErrorCategory::Rendering,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Rendering => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a run that failed with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ConfigNotFound { path } => {
                format!("Create '{}' or pass another file with --config", path)
            }
            Self::ConfigParse { .. } => {
                "The file must be a YAML mapping of province names to lists of city names".to_string()
            }
            Self::UnknownMapType { map_type } => format!(
                "Rename '{}' to a supported province short name (for example 广东, 内蒙古, 西藏)",
                map_type
            ),
            Self::IoError(_) => {
                "Check that the output locations are writable and the disk is not full".to_string()
            }
            Self::SerializationError(_) => "Report this as a bug".to_string(),
            Self::SettingsError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the render settings file and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigNotFound { path } => format!("找不到旅行配置文件: {}", path),
            Self::ConfigParse { path, message } => {
                format!("旅行配置文件格式错误 ({}): {}", path, message)
            }
            Self::UnknownMapType { map_type } => format!("无法识别的地图区域: {}", map_type),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FootprintError>;
