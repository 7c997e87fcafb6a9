pub mod catalog;
pub mod error;
pub mod export;
pub mod table;
pub mod weapon;

pub use error::CatalogError;
pub use table::WeaponTable;
pub use weapon::{AmmoBadge, WeaponClass, WeaponEntry};
