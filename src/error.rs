//! Error kinds with their process exit codes.

use thiserror::Error;

/// Exit code for malformed command lines.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for internal logic faults (sysexits `EX_SOFTWARE`).
pub const EXIT_SOFTWARE: i32 = 70;
/// Exit code for output failures (sysexits `EX_IOERR`).
pub const EXIT_IO: i32 = 74;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CalError {
    /// Wrong number of positional arguments (one, or more than three).
    #[error("{message}")]
    ArgumentCount { message: String },

    /// One or more fields failed their format check. Messages are reported
    /// together, one per line.
    #[error("{}", messages.join("\n"))]
    Format { messages: Vec<String> },

    /// A month spec outside its valid ranges reached construction.
    #[error("Invalid month spec: {message}")]
    InvalidMonthSpec { message: String },

    /// Writing the calendar failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalError {
    /// Exit code for this error kind. User input errors and internal faults
    /// never share a code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::ArgumentCount { .. } | Self::Format { .. } => EXIT_USAGE,
            Self::InvalidMonthSpec { .. } => EXIT_SOFTWARE,
            Self::Io(_) => EXIT_IO,
        }
    }

    /// Whether the error was caused by the user's input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(*self, Self::ArgumentCount { .. } | Self::Format { .. })
    }

    pub fn argument_count<S: Into<String>>(message: S) -> Self {
        Self::ArgumentCount {
            message: message.into(),
        }
    }

    pub fn invalid_month_spec<S: Into<String>>(message: S) -> Self {
        Self::InvalidMonthSpec {
            message: message.into(),
        }
    }
}
