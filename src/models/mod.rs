pub mod booking;
pub mod vehicle;

pub use booking::BookingEntry;
pub use vehicle::{CatalogResponse, Category, Vehicle, VehicleGroup};
