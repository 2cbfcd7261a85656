use crate::graph::RoomId;
use crate::landmark::Landmark;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when manipulating the room graph.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested room ID does not exist in the graph.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with the same true name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateName(String),

    /// No room has been registered for the landmark.
    #[error("landmark not registered: {0:?}")]
    MissingLandmark(Landmark),
}
