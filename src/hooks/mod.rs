pub mod use_bookings;
pub mod use_catalog;
pub mod use_wishlist;

pub use use_bookings::{use_bookings, UseBookingsHandle};
pub use use_catalog::{use_catalog, UseCatalogHandle};
pub use use_wishlist::{use_wishlist, UseWishlistHandle};
