pub mod schema;

mod company;
mod department;
mod job;

use std::sync::Arc;

use minierp_sql::{SQLError, SQLStore};
use minierp_store::Repository;

use crate::model::{Company, Department, Job};

/// Org service — companies, departments and jobs.
pub struct OrgService {
    pub(crate) companies: Repository<Company>,
    pub(crate) departments: Repository<Department>,
    pub(crate) jobs: Repository<Job>,
}

impl OrgService {
    pub fn new(sql: Arc<dyn SQLStore>) -> Result<Self, SQLError> {
        schema::init_schema(sql.as_ref())?;
        tracing::debug!("org schema ready");
        Ok(Self {
            companies: Repository::new(sql.clone()),
            departments: Repository::new(sql.clone()),
            jobs: Repository::new(sql),
        })
    }
}
