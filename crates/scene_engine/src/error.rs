//! Scene engine errors

use thiserror::Error;

use crate::primitive::ObjectType;

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while loading or animating a scene
#[derive(Error, Debug)]
pub enum SceneError {
    /// Object type the loader has no factory for
    #[error("Unsupported object type '{object_type}' for object '{id}'")]
    UnsupportedType {
        /// Offending object id (flat id or definition base id)
        id: String,
        /// Type string as written in the document
        object_type: String,
    },

    /// Pattern name with no generator for the requested object type
    #[error("Unsupported pattern '{pattern}' for object type '{object_type}'")]
    UnsupportedPattern {
        /// Pattern name as written in the document
        pattern: String,
        /// Object type the pattern was requested for
        object_type: ObjectType,
    },

    /// Size text that is not a number or `WxL` pair
    #[error("Malformed size '{size}' for object '{id}'")]
    MalformedSize {
        /// Offending object id
        id: String,
        /// Size text as written in the document
        size: String,
    },

    /// Document could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Document could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Document extension has no parser
    #[error("Unsupported scene format: {0}")]
    UnsupportedFormat(String),

    /// Presentation sink failed during a frame
    #[error("Frame sink error: {0}")]
    Sink(String),
}
