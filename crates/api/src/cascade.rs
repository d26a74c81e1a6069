//! Post-commit cascade execution for project and user mutations.
//!
//! The store enforces no foreign keys, so the follow-up writes that keep
//! dependent records consistent run here, after the primary write has
//! committed. Steps run in order but independently: a failed step is
//! logged and recorded in the report, and the remaining steps still run.
//! The primary write is never rolled back.

use std::future::Future;

use pxl_core::cascade::CascadeReport;
use pxl_core::types::DbId;
use pxl_db::models::project::{Project, ProjectStatus};
use pxl_db::repositories::{InvoiceRepo, LeadRepo, ProjectRepo, QuotationRepo};
use pxl_db::DbPool;
use serde::Serialize;

/// Response body for deletions that fan out, carrying the step report.
#[derive(Debug, Serialize)]
pub struct CascadeSummary {
    pub deleted: bool,
    pub cascade: CascadeReport,
}

/// Run one cascade step and record its outcome.
async fn run_step<F>(report: &mut CascadeReport, name: &'static str, step: F)
where
    F: Future<Output = Result<u64, sqlx::Error>>,
{
    match step.await {
        Ok(rows) => report.applied(name, rows),
        Err(error) => {
            tracing::warn!(step = name, %error, "cascade step failed");
            report.failed(name, error);
        }
    }
}

/// Steps run after a project update has committed.
///
/// Title/amount changes are copied onto every invoice referencing the
/// project. A transition into COMPLETED creates the project's invoice if
/// none exists yet; the existence check keeps the step idempotent across
/// repeated updates.
pub async fn after_project_update(
    pool: &DbPool,
    before: &Project,
    after: &Project,
) -> CascadeReport {
    let mut report = CascadeReport::new();

    if before.title != after.title || before.amount != after.amount {
        run_step(
            &mut report,
            "propagate-invoice-fields",
            InvoiceRepo::propagate_project_fields(pool, after.id, &after.title, after.amount),
        )
        .await;
    } else {
        report.skipped("propagate-invoice-fields");
    }

    if after.status == ProjectStatus::Completed {
        match InvoiceRepo::exists_for_project(pool, after.id).await {
            Ok(true) => report.skipped("auto-create-invoice"),
            Ok(false) => match InvoiceRepo::create_for_project(pool, after).await {
                Ok(_) => report.applied("auto-create-invoice", 1),
                Err(error) => {
                    tracing::warn!(step = "auto-create-invoice", %error, "cascade step failed");
                    report.failed("auto-create-invoice", error);
                }
            },
            Err(error) => {
                tracing::warn!(step = "auto-create-invoice", %error, "cascade step failed");
                report.failed("auto-create-invoice", error);
            }
        }
    } else {
        report.skipped("auto-create-invoice");
    }

    report
}

/// Steps run after a project deletion has committed: remove every invoice
/// that referenced it.
pub async fn after_project_delete(pool: &DbPool, project_id: DbId) -> CascadeReport {
    let mut report = CascadeReport::new();
    run_step(
        &mut report,
        "delete-invoices",
        InvoiceRepo::delete_by_project(pool, project_id),
    )
    .await;
    report
}

/// Steps run after a user deletion has committed. The three cascades are
/// independent; one failing does not stop the others.
pub async fn after_user_delete(pool: &DbPool, user_id: DbId) -> CascadeReport {
    let mut report = CascadeReport::new();
    run_step(
        &mut report,
        "strip-project-assignee",
        ProjectRepo::strip_assignee(pool, user_id),
    )
    .await;
    run_step(
        &mut report,
        "unassign-leads",
        LeadRepo::unassign_user(pool, user_id),
    )
    .await;
    run_step(
        &mut report,
        "clear-quotation-author",
        QuotationRepo::clear_author(pool, user_id),
    )
    .await;
    report
}
