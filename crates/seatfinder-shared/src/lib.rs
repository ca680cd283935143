//! # seatfinder-shared
//!
//! Domain types and logic shared by the seat finder crates: guest records,
//! the name/relationship resolver, table coordinates and floor-plan
//! annotation.

pub mod constants;
pub mod coords;
pub mod error;
pub mod floor_plan;
pub mod resolver;
pub mod types;

pub use coords::TableCoordinates;
pub use error::{CoordinatesError, MapError};
pub use floor_plan::{FloorPlan, MapRender, Marker};
pub use resolver::{Candidate, Resolution, Resolver};
pub use types::{GuestRecord, Point};
