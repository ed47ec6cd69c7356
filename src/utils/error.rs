use thiserror::Error;

/// A specialized Result type for toolkit operations.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Represents errors that can occur while synthesizing or invoking tools.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// A component or output declaration is malformed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An output names a method that is not registered on its component
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// A tool was invoked with arguments its schema rejects
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A tool with the given name is not registered
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool invocation failed while executing
    #[error("Execution error: {0}")]
    Execution(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error during read/write operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
