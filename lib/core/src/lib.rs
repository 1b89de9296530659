pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod module;
pub mod types;
pub mod validate;

pub use auth::{Principal, authorize};
pub use config::ServiceConfig;
pub use error::{ErrorCode, OpCode, ServiceError};
pub use filter::{FilterOp, Predicate};
pub use module::Module;
pub use types::{
    Audit, DeleteParams, GetParams, ListParams, ListResult, OneOrMany, SortOrder, merge_patch,
    new_id, now_rfc3339,
};
pub use validate::{check_id, check_list_params, parse_query, validate_payload, validation_error};
