use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PlotResult<T> = Result<T, BandPlotError>;
pub type ParserResult<T> = PlotResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandPlotErrorCategory {
    Success,
    InputValidationError,
    IoSystemError,
    ComputationError,
    RenderError,
}

impl BandPlotErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InputValidationError => 2,
            Self::IoSystemError => 3,
            Self::ComputationError => 4,
            Self::RenderError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InputValidationError => "InputValidationError",
            Self::IoSystemError => "IoSystemError",
            Self::ComputationError => "ComputationError",
            Self::RenderError => "RenderError",
        }
    }

    pub const fn is_fatal(self) -> bool {
        !matches!(self, Self::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandPlotError {
    category: BandPlotErrorCategory,
    code: &'static str,
    message: String,
}

impl BandPlotError {
    pub fn new(
        category: BandPlotErrorCategory,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn input_validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(BandPlotErrorCategory::InputValidationError, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(BandPlotErrorCategory::IoSystemError, code, message)
    }

    pub fn computation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(BandPlotErrorCategory::ComputationError, code, message)
    }

    pub fn render(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(BandPlotErrorCategory::RenderError, code, message)
    }

    pub const fn category(&self) -> BandPlotErrorCategory {
        self.category
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        let severity = if self.category.is_fatal() {
            "ERROR"
        } else {
            "INFO"
        };
        format!("{}: [{}] {}", severity, self.code, self.message)
    }

    pub fn fatal_exit_line(&self) -> Option<String> {
        self.category
            .is_fatal()
            .then(|| format!("FATAL EXIT CODE: {}", self.exit_code()))
    }
}

impl Display for BandPlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.category.as_str(),
            self.code,
            self.message
        )
    }
}

impl Error for BandPlotError {}
