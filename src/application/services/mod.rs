//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on the I/O boundary traits (MenuStore, FieldEnricher)
//! but are themselves concrete structs, not traits.

mod location;
mod menu;
mod query;

pub use location::LocationService;
pub use menu::MenuService;
pub use query::QueryService;
