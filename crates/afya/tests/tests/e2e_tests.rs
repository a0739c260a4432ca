#[path = "e2e/clause_lifecycle.rs"]
mod clause_lifecycle;

#[path = "e2e/rollback_on_store_failure.rs"]
mod rollback_on_store_failure;

#[path = "e2e/catalogue_scoring.rs"]
mod catalogue_scoring;
