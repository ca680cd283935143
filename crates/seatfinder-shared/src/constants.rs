/// Required column holding the name printed on the seating placard
pub const COLUMN_PLACARD_NAME: &str = "Placard Name";

/// Required column holding the assigned table identifier
pub const COLUMN_TABLE: &str = "Table";

/// Optional column holding the guest's relation to the couple
pub const COLUMN_RELATIONSHIP: &str = "Relationship to Couple";

/// Shown in place of the relationship when a guest has none
pub const RELATIONSHIP_UNAVAILABLE: &str = "Relationship N/A";

/// Marker radius in original-resolution pixels
pub const DEFAULT_MARKER_RADIUS: u32 = 35;

/// Largest marker radius a coordinates file may configure
pub const MAX_MARKER_RADIUS: u32 = 10_000;

/// Marker outline thickness in pixels (not scaled)
pub const MARKER_STROKE_WIDTH: u32 = 10;

/// Marker outline colour (#FF0000)
pub const MARKER_COLOR: [u8; 3] = [0xFF, 0x00, 0x00];

/// Floor plans wider than this are downscaled before display
pub const DEFAULT_MAX_MAP_WIDTH: u32 = 1800;
