pub mod booking_store;
pub mod catalog_store;
pub mod wishlist_store;

pub use booking_store::BookingStore;
pub use catalog_store::CatalogStore;
pub use wishlist_store::WishlistStore;
