pub mod assoc;
pub mod entity;
pub mod error;
pub mod ops;
pub mod render;
pub mod repo;

pub use assoc::AssocRepository;
pub use entity::{AssocEntity, Entity};
pub use error::StoreError;
pub use ops::OpDef;
pub use repo::Repository;
