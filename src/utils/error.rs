use thiserror::Error;

/// 新增條目時的驗證錯誤
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdmissionError {
    #[error("Malformed entry: {reason}")]
    MalformedCandidate { reason: String },

    #[error("Entry name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid required items: {reason}")]
    InvalidRequirementList { reason: String },

    #[error("Required item '{0}' appears more than once")]
    DuplicateRequirementTarget(String),

    #[error("Invalid ingredient cost: {reason}")]
    InvalidCost { reason: String },
}

impl AdmissionError {
    pub fn code(&self) -> &'static str {
        match self {
            AdmissionError::MalformedCandidate { .. } => "malformed_entry",
            AdmissionError::DuplicateName(_) => "duplicate_name",
            AdmissionError::InvalidRequirementList { .. } => "invalid_required_items",
            AdmissionError::DuplicateRequirementTarget(_) => "duplicate_required_item",
            AdmissionError::InvalidCost { .. } => "invalid_cost",
        }
    }
}

/// 展開食譜時的錯誤
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("Recipe '{0}' not found")]
    NotFound(String),

    #[error("Required item '{0}' is not in the cookbook")]
    UnresolvedRequirement(String),

    #[error("Recipe '{0}' requires itself")]
    CyclicReference(String),

    #[error("Totals for recipe '{0}' are too large to represent")]
    CostOverflow(String),
}

impl ResolutionError {
    pub fn code(&self) -> &'static str {
        match self {
            ResolutionError::NotFound(_) => "not_found",
            ResolutionError::UnresolvedRequirement(_) => "unresolved_requirement",
            ResolutionError::CyclicReference(_) => "cyclic_reference",
            ResolutionError::CostOverflow(_) => "cost_overflow",
        }
    }
}

#[derive(Error, Debug)]
pub enum CookbookError {
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Resolution,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl CookbookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CookbookError::Admission(_) => ErrorCategory::Validation,
            CookbookError::Resolution(_) => ErrorCategory::Resolution,
            CookbookError::ConfigValidationError { .. }
            | CookbookError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CookbookError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 請求層級的錯誤，服務本身不受影響
            CookbookError::Admission(_) | CookbookError::Resolution(_) => ErrorSeverity::Low,
            CookbookError::ConfigValidationError { .. }
            | CookbookError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CookbookError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Stable identifier rendered in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            CookbookError::Admission(e) => e.code(),
            CookbookError::Resolution(e) => e.code(),
            CookbookError::IoError(_) => "io_error",
            CookbookError::ConfigValidationError { .. }
            | CookbookError::InvalidConfigValueError { .. } => "config_error",
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CookbookError::Admission(AdmissionError::DuplicateName(name)) => {
                format!("Pick a different name than '{}'; entries cannot be replaced", name)
            }
            CookbookError::Admission(_) => {
                "Check the entry body: type, name, requiredItems and cookTime".to_string()
            }
            CookbookError::Resolution(ResolutionError::UnresolvedRequirement(name)) => {
                format!("Add an entry named '{}' and retry", name)
            }
            CookbookError::Resolution(ResolutionError::CyclicReference(_)) => {
                "Remove the circular recipe reference".to_string()
            }
            CookbookError::Resolution(ResolutionError::CostOverflow(_)) => {
                "Lower the quantities or ingredient costs in this recipe".to_string()
            }
            CookbookError::Resolution(ResolutionError::NotFound(_)) => {
                "Only recipes can be summarized; check the name".to_string()
            }
            CookbookError::IoError(_) => {
                "Check that the address is free and the file is readable".to_string()
            }
            CookbookError::ConfigValidationError { .. }
            | CookbookError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("The entry was rejected: {}", self),
            ErrorCategory::Resolution => format!("The summary could not be built: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CookbookError>;
