use minierp_core::{ListResult, Principal, ServiceError};
use minierp_store::ops;

use super::OrgService;
use crate::codes;
use crate::model::{CreateJob, Job, UpdateJob};

impl OrgService {
    pub fn list_jobs(
        &self,
        principal: &Principal,
        query: Option<&str>,
    ) -> Result<ListResult<Job>, ServiceError> {
        ops::list(&self.jobs, principal, &codes::job::LIST, query)
    }

    pub fn create_jobs(
        &self,
        principal: &Principal,
        body: &[u8],
    ) -> Result<(Vec<Job>, bool), ServiceError> {
        let actor = principal.actor();
        ops::create(
            &self.jobs,
            principal,
            &codes::job::CREATE,
            body,
            |c: CreateJob| c.into_record(actor.clone()),
        )
    }

    pub fn get_job(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Job, ServiceError> {
        ops::get(&self.jobs, principal, &codes::job::GET, id, query)
    }

    pub fn update_job(
        &self,
        principal: &Principal,
        id: &str,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<Job, ServiceError> {
        ops::update::<Job, UpdateJob>(
            &self.jobs,
            principal,
            &codes::job::UPDATE,
            id,
            body,
            query,
        )
    }

    pub fn delete_job(
        &self,
        principal: &Principal,
        id: &str,
        query: Option<&str>,
    ) -> Result<Job, ServiceError> {
        ops::remove(&self.jobs, principal, &codes::job::DELETE, id, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{filter_query, principal, service};

    fn p() -> Principal {
        principal(
            "hr",
            &[
                codes::job::LIST,
                codes::job::CREATE,
                codes::job::GET,
                codes::job::UPDATE,
                codes::job::DELETE,
            ],
        )
    }

    #[test]
    fn job_lifecycle() {
        let svc = service();
        let (records, _) = svc
            .create_jobs(&p(), br#"{"name":"welder","department_id":"d1"}"#)
            .unwrap();
        let id = records[0].id.clone();

        let updated = svc
            .update_job(&p(), &id, br#"{"name":"senior welder"}"#, None)
            .unwrap();
        assert_eq!(updated.name, "senior welder");
        assert_eq!(updated.department_id.as_deref(), Some("d1"));

        let deleted = svc.delete_job(&p(), &id, None).unwrap();
        assert!(deleted.audit.deleted_at.is_some());
        let err = svc.get_job(&p(), &id, None).unwrap_err();
        assert_eq!(err.code().to_string(), "C12H03-03");
    }

    #[test]
    fn filter_by_department() {
        let svc = service();
        svc.create_jobs(
            &p(),
            br#"[
                {"name":"welder","department_id":"d1"},
                {"name":"fitter","department_id":"d1"},
                {"name":"clerk","department_id":"d2"}
            ]"#,
        )
        .unwrap();

        let query = filter_query(r#"{"department_id":"d1"}"#);
        assert_eq!(svc.list_jobs(&p(), Some(&query)).unwrap().total, 2);
    }
}
