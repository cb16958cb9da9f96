#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Polygon needs at least 3 edges, got {0}")]
    InvalidEdgeCount(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Repaint channel closed")]
    RepaintChannelClosed,

    #[error("Renderer error: {0}")]
    RendererError(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SceneError>;
