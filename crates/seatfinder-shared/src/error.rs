use thiserror::Error;

/// The floor-plan image could not be loaded or encoded.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("Map image file not found at '{0}'")]
    NotFound(String),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Floor plan has zero width or height")]
    Empty,
}

#[derive(Error, Debug)]
pub enum CoordinatesError {
    #[error("Failed to read coordinates file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid coordinates file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Marker radius must be positive")]
    ZeroRadius,

    #[error("Marker radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },
}
