mod category;
mod item;
mod item_type;
mod stock;
mod supplier;
mod types;
mod warehouse;
mod warehouse_item;

pub use category::*;
pub use item::*;
pub use item_type::*;
pub use stock::*;
pub use supplier::*;
pub use types::*;
pub use warehouse::*;
pub use warehouse_item::*;
