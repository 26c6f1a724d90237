// Utils compartidos

pub mod constants;
pub mod images;
pub mod storage;

pub use constants::*;
pub use images::*;
