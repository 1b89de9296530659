//! The shared four-gate operation pipeline.
//!
//! Every service operation passes the same gates in a fixed order:
//! authorization, validation, lookup (for id-addressed operations),
//! then the action itself. Each gate is a terminal failure branch with
//! its own stable error code suffix; module services are thin named
//! wrappers over these functions.
//!
//! Branch layout:
//! - list/create: 00 authz, 01 validation, 02 action.
//! - get/update/delete: 00 authz, 01 validation, 02 lookup failure,
//!   03 not found, 04 action.
//! - association operations add the member lookup: 04 member lookup
//!   failure, 05 member not found, 06 action.

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use minierp_core::{
    DeleteParams, GetParams, ListParams, ListResult, OneOrMany, OpCode, Principal, ServiceError,
    authorize, check_id, check_list_params, merge_patch, parse_query, validate_payload,
    validation_error,
};

use crate::assoc::AssocRepository;
use crate::entity::{AssocEntity, Entity};
use crate::error::StoreError;
use crate::repo::Repository;

/// One row of a module's operation table: the permission string that
/// gates the operation and its `C<NN>H<NN>` code prefix.
#[derive(Debug, Clone, Copy)]
pub struct OpDef {
    pub permission: &'static str,
    pub code: OpCode,
}

impl OpDef {
    pub const fn new(permission: &'static str, resource: u8, op: u8) -> Self {
        Self {
            permission,
            code: OpCode::new(resource, op),
        }
    }
}

/// Server-owned record fields a merge patch may never touch.
const RESOURCE_PINNED: &[&str] = &["id", "created_at", "created_by", "deleted_at", "deleted_by"];

fn backend(code: OpCode, branch: u8, e: StoreError) -> ServiceError {
    ServiceError::Backend {
        code: code.branch(branch),
        message: e.to_string(),
    }
}

/// Map a store outcome from a lookup-then-act step: a miss keeps its
/// 404 branch, anything else is a backend failure.
fn lookup(code: OpCode, storage_branch: u8, missing_branch: u8, e: StoreError) -> ServiceError {
    match e {
        StoreError::NotFound(what) => missing(code, missing_branch, what),
        other => backend(code, storage_branch, other),
    }
}

fn missing(code: OpCode, branch: u8, what: String) -> ServiceError {
    ServiceError::NotFound {
        code: code.branch(branch),
        message: what,
    }
}

fn parse_body<C: DeserializeOwned>(body: &[u8], code: OpCode) -> Result<C, ServiceError> {
    serde_json::from_slice(body)
        .map_err(|e| validation_error(code, format!("invalid request body: {}", e)))
}

/// Merge-patch `patch` onto `current`, dropping pinned keys first.
fn apply_patch<R>(
    current: &R,
    mut patch: serde_json::Value,
    pinned: &[&str],
    code: OpCode,
    action_branch: u8,
) -> Result<R, ServiceError>
where
    R: Serialize + DeserializeOwned,
{
    let obj = patch
        .as_object_mut()
        .ok_or_else(|| validation_error(code, "patch body must be a JSON object"))?;
    for key in pinned {
        obj.remove(*key);
    }

    let mut base = serde_json::to_value(current).map_err(|e| ServiceError::Backend {
        code: code.branch(action_branch),
        message: e.to_string(),
    })?;
    merge_patch(&mut base, &patch);

    serde_json::from_value(base)
        .map_err(|e| validation_error(code, format!("patch produces an invalid record: {}", e)))
}

// ── Resource operations ─────────────────────────────────────────────

/// List from a raw query string. The query is parsed after the
/// authorization gate, like request bodies, so a malformed query from
/// an unauthorized caller still reports 403.
pub fn list<T: Entity>(
    repo: &Repository<T>,
    principal: &Principal,
    def: &OpDef,
    query: Option<&str>,
) -> Result<ListResult<T>, ServiceError> {
    authorize(principal, def.permission, def.code)?;
    let params: ListParams = parse_query(query, def.code)?;
    let predicates = check_list_params(&params, T::COLUMNS, def.code)?;

    let items = repo
        .list(&predicates, &params)
        .map_err(|e| backend(def.code, 2, e))?;
    let total = repo
        .count(&predicates, params.paranoid)
        .map_err(|e| backend(def.code, 2, e))?;
    Ok(ListResult { items, total })
}

/// Create from a raw body that may hold one object or an array.
/// Returns the inserted records and whether the request was single.
pub fn create<T, C, F>(
    repo: &Repository<T>,
    principal: &Principal,
    def: &OpDef,
    body: &[u8],
    build: F,
) -> Result<(Vec<T>, bool), ServiceError>
where
    T: Entity,
    C: DeserializeOwned + Validate,
    F: FnMut(C) -> T,
{
    authorize(principal, def.permission, def.code)?;

    let payload: OneOrMany<C> = parse_body(body, def.code)?;
    let single = payload.is_single();
    let inputs = payload.into_vec();
    if inputs.is_empty() {
        return Err(validation_error(def.code, "create payload is empty"));
    }
    for input in &inputs {
        validate_payload(input, def.code)?;
    }

    let records: Vec<T> = inputs.into_iter().map(build).collect();
    repo.create(&records).map_err(|e| backend(def.code, 2, e))?;
    Ok((records, single))
}

pub fn get<T: Entity>(
    repo: &Repository<T>,
    principal: &Principal,
    def: &OpDef,
    id: &str,
    query: Option<&str>,
) -> Result<T, ServiceError> {
    authorize(principal, def.permission, def.code)?;
    check_id(id, def.code)?;
    let params: GetParams = parse_query(query, def.code)?;

    repo.get(id, params.paranoid)
        .map_err(|e| backend(def.code, 2, e))?
        .ok_or_else(|| missing(def.code, 3, format!("{}/{}", T::TABLE, id)))
}

/// JSON merge-patch update. `U` is the schema the patch is validated
/// against before the record is looked up.
pub fn update<T, U>(
    repo: &Repository<T>,
    principal: &Principal,
    def: &OpDef,
    id: &str,
    body: &[u8],
    query: Option<&str>,
) -> Result<T, ServiceError>
where
    T: Entity,
    U: DeserializeOwned + Validate,
{
    authorize(principal, def.permission, def.code)?;
    check_id(id, def.code)?;
    let params: GetParams = parse_query(query, def.code)?;
    let patch: serde_json::Value = parse_body(body, def.code)?;
    let typed: U = serde_json::from_value(patch.clone())
        .map_err(|e| validation_error(def.code, format!("invalid request body: {}", e)))?;
    validate_payload(&typed, def.code)?;

    let current = repo
        .get(id, params.paranoid)
        .map_err(|e| backend(def.code, 2, e))?
        .ok_or_else(|| missing(def.code, 3, format!("{}/{}", T::TABLE, id)))?;

    let mut updated: T = apply_patch(&current, patch, RESOURCE_PINNED, def.code, 4)?;
    updated.audit_mut().touch(principal.actor());
    repo.update(id, &updated)
        .map_err(|e| lookup(def.code, 4, 3, e))?;
    Ok(updated)
}

/// Delete. `force` removes the row; otherwise the record is
/// soft-deleted. Returns the deleted record either way.
pub fn remove<T: Entity>(
    repo: &Repository<T>,
    principal: &Principal,
    def: &OpDef,
    id: &str,
    query: Option<&str>,
) -> Result<T, ServiceError> {
    authorize(principal, def.permission, def.code)?;
    check_id(id, def.code)?;
    let params: DeleteParams = parse_query(query, def.code)?;

    let current = repo
        .get(id, params.paranoid)
        .map_err(|e| backend(def.code, 2, e))?
        .ok_or_else(|| missing(def.code, 3, format!("{}/{}", T::TABLE, id)))?;

    if params.force {
        repo.hard_delete(id).map_err(|e| lookup(def.code, 4, 3, e))?;
        Ok(current)
    } else {
        repo.soft_delete(current, principal.actor())
            .map_err(|e| lookup(def.code, 4, 3, e))
    }
}

// ── Association operations ──────────────────────────────────────────
//
// The parent must resolve before the join table is touched; a missing
// parent is the lookup gate's 404 (branch 03), a missing member is a
// distinct 404 (branch 05).

fn require_parent<P: Entity>(
    parents: &Repository<P>,
    def: &OpDef,
    parent_id: &str,
) -> Result<P, ServiceError> {
    parents
        .get(parent_id, true)
        .map_err(|e| backend(def.code, 2, e))?
        .ok_or_else(|| missing(def.code, 3, format!("{}/{}", P::TABLE, parent_id)))
}

pub fn assoc_list<P: Entity, J: AssocEntity>(
    parents: &Repository<P>,
    assoc: &AssocRepository<J>,
    principal: &Principal,
    def: &OpDef,
    parent_id: &str,
) -> Result<Vec<J>, ServiceError> {
    authorize(principal, def.permission, def.code)?;
    check_id(parent_id, def.code)?;
    require_parent(parents, def, parent_id)?;

    assoc.list(parent_id).map_err(|e| backend(def.code, 4, e))
}

pub fn assoc_add<P, J, C, F>(
    parents: &Repository<P>,
    assoc: &AssocRepository<J>,
    principal: &Principal,
    def: &OpDef,
    parent_id: &str,
    body: &[u8],
    build: F,
) -> Result<J, ServiceError>
where
    P: Entity,
    J: AssocEntity,
    C: DeserializeOwned + Validate,
    F: FnOnce(C) -> J,
{
    authorize(principal, def.permission, def.code)?;
    check_id(parent_id, def.code)?;
    let input: C = parse_body(body, def.code)?;
    validate_payload(&input, def.code)?;
    require_parent(parents, def, parent_id)?;

    let record = build(input);
    assoc.put(&record).map_err(|e| backend(def.code, 4, e))?;
    Ok(record)
}

pub fn assoc_get<P: Entity, J: AssocEntity>(
    parents: &Repository<P>,
    assoc: &AssocRepository<J>,
    principal: &Principal,
    def: &OpDef,
    parent_id: &str,
    child_id: &str,
) -> Result<J, ServiceError> {
    authorize(principal, def.permission, def.code)?;
    check_id(parent_id, def.code)?;
    check_id(child_id, def.code)?;
    require_parent(parents, def, parent_id)?;

    assoc
        .get(parent_id, child_id)
        .map_err(|e| backend(def.code, 4, e))?
        .ok_or_else(|| missing(def.code, 5, format!("{}/{}/{}", J::TABLE, parent_id, child_id)))
}

pub fn assoc_update<P, J, U>(
    parents: &Repository<P>,
    assoc: &AssocRepository<J>,
    principal: &Principal,
    def: &OpDef,
    parent_id: &str,
    child_id: &str,
    body: &[u8],
) -> Result<J, ServiceError>
where
    P: Entity,
    J: AssocEntity,
    U: DeserializeOwned + Validate,
{
    authorize(principal, def.permission, def.code)?;
    check_id(parent_id, def.code)?;
    check_id(child_id, def.code)?;
    let patch: serde_json::Value = parse_body(body, def.code)?;
    let typed: U = serde_json::from_value(patch.clone())
        .map_err(|e| validation_error(def.code, format!("invalid request body: {}", e)))?;
    validate_payload(&typed, def.code)?;
    require_parent(parents, def, parent_id)?;

    let current = assoc
        .get(parent_id, child_id)
        .map_err(|e| backend(def.code, 4, e))?
        .ok_or_else(|| missing(def.code, 5, format!("{}/{}/{}", J::TABLE, parent_id, child_id)))?;

    let pinned = [
        J::PARENT_COL,
        J::CHILD_COL,
        "created_at",
        "created_by",
        "deleted_at",
        "deleted_by",
    ];
    let mut updated: J = apply_patch(&current, patch, &pinned, def.code, 6)?;
    updated.audit_mut().touch(principal.actor());
    assoc
        .update(parent_id, child_id, &updated)
        .map_err(|e| lookup(def.code, 6, 5, e))?;
    Ok(updated)
}

pub fn assoc_remove<P: Entity, J: AssocEntity>(
    parents: &Repository<P>,
    assoc: &AssocRepository<J>,
    principal: &Principal,
    def: &OpDef,
    parent_id: &str,
    child_id: &str,
) -> Result<J, ServiceError> {
    authorize(principal, def.permission, def.code)?;
    check_id(parent_id, def.code)?;
    check_id(child_id, def.code)?;
    require_parent(parents, def, parent_id)?;

    // Verify the member exists before removing so a miss gets its own
    // 404 branch rather than folding into the action.
    assoc
        .get(parent_id, child_id)
        .map_err(|e| backend(def.code, 4, e))?
        .ok_or_else(|| missing(def.code, 5, format!("{}/{}/{}", J::TABLE, parent_id, child_id)))?;

    assoc
        .remove(parent_id, child_id)
        .map_err(|e| backend(def.code, 6, e))?
        .ok_or_else(|| missing(def.code, 5, format!("{}/{}/{}", J::TABLE, parent_id, child_id)))
}
