//! Quality inspection workflow.
//!
//! [`QualityWorkflow`] is the single entry point for reading quality records,
//! managing their comment history and moving records through the
//! `start` → `finish` lifecycle.
//!
//! # Concurrency
//!
//! Comment appends and lifecycle transitions run inside of a database transaction.
//! Lifecycle updates are additionally conditional on the timestamp they set still
//! being empty, so when two requests race to start (or finish) the same record,
//! only one of them succeeds and writes the automatic comment.
//! Comment line numbers are protected by the `(chip_id, line)` primary key:
//! a concurrent append that computed the same line fails with a database error
//! instead of silently duplicating it.

use std::sync::Arc;

use common::config::Phases;
use db::{
    comment, quality_record, sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionErrorExt, TransactionTrait,
};
use tracing::info;

use crate::error::AppError;

/// Status label of a started quality inspection.
pub const STATUS_STARTED: &str = "STARTED";

/// Status label of a finished quality inspection.
pub const STATUS_FINISHED: &str = "FINISHED";

/// Comment to append to a chip's history.
#[derive(Clone, Debug)]
pub struct NewComment {
    pub chip_id: i64,
    pub status: String,
    pub author: String,
    pub text: String,
}

/// Quality record lifecycle transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Transition {
    Start,
    Finish,
}

impl Transition {
    /// Check if the provided record can go through this transition.
    fn check(self, record: &quality_record::Model) -> Result<(), AppError> {
        match self {
            Self::Start if record.start_time.is_some() => Err(self.conflict()),
            Self::Finish if record.start_time.is_none() => Err(AppError::validation(
                "quality inspection not started, start it before finishing",
            )),
            Self::Finish if record.end_time.is_some() => Err(self.conflict()),
            _ => Ok(()),
        }
    }

    /// Error returned when the transition was already applied.
    fn conflict(self) -> AppError {
        match self {
            Self::Start => AppError::validation("quality inspection already started"),
            Self::Finish => AppError::validation("quality inspection already finished"),
        }
    }

    /// Timestamp column set by this transition.
    fn column(self) -> quality_record::Column {
        match self {
            Self::Start => quality_record::Column::StartTime,
            Self::Finish => quality_record::Column::EndTime,
        }
    }

    fn status(self) -> &'static str {
        match self {
            Self::Start => STATUS_STARTED,
            Self::Finish => STATUS_FINISHED,
        }
    }

    /// Text of the automatic comment.
    fn comment(self) -> &'static str {
        match self {
            Self::Start => "Quality started.",
            Self::Finish => "Quality finished.",
        }
    }
}

/// Quality workflow façade.
pub struct QualityWorkflow {
    db: Arc<DatabaseConnection>,
    phases: Phases,
}

impl QualityWorkflow {
    /// Create a new workflow over the provided database connection.
    pub fn new(db: Arc<DatabaseConnection>, phases: Phases) -> Self {
        Self { db, phases }
    }

    /// List all records currently in the quality phase.
    pub async fn list_in_phase(&self) -> Result<Vec<quality_record::Model>, AppError> {
        let records = quality_record::Entity::find()
            .filter(quality_record::Column::PhaseId.eq(self.phases.quality))
            .all(&*self.db)
            .await?;

        Ok(records)
    }

    /// List quality phase records of a vehicle using its external identifier.
    pub async fn get_by_external_id(
        &self,
        hd_id: i64,
    ) -> Result<Vec<quality_record::Model>, AppError> {
        let records = quality_record::Entity::find()
            .filter(quality_record::Column::HdId.eq(hd_id))
            .filter(quality_record::Column::PhaseId.eq(self.phases.quality))
            .all(&*self.db)
            .await?;

        if records.is_empty() {
            return Err(AppError::not_found(format!(
                "id_hd={hd_id} is not in the quality phase"
            )));
        }

        Ok(records)
    }

    /// Get a single record using its primary key.
    pub async fn get_by_id(&self, id: i64) -> Result<quality_record::Model, AppError> {
        find_record(&*self.db, id).await
    }

    /// Get a vehicle record from either the previous or the quality phase.
    ///
    /// When both exist, database row order decides which one is returned.
    pub async fn get_prior_phase_info(
        &self,
        hd_id: i64,
    ) -> Result<quality_record::Model, AppError> {
        quality_record::Entity::find()
            .filter(quality_record::Column::HdId.eq(hd_id))
            .filter(
                quality_record::Column::PhaseId.is_in([self.phases.previous, self.phases.quality]),
            )
            .one(&*self.db)
            .await?
            .ok_or_else(|| AppError::not_found(format!("id_hd={hd_id} is not in the previous phase")))
    }

    /// List the comment history of a chip, oldest first.
    pub async fn list_comments(&self, chip_id: i64) -> Result<Vec<comment::Model>, AppError> {
        let comments = comment::Entity::find()
            .filter(comment::Column::ChipId.eq(chip_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Line)
            .all(&*self.db)
            .await?;

        Ok(comments)
    }

    /// Append a comment to a chip's history.
    ///
    /// Comments with blank text are rejected before touching the database.
    pub async fn add_comment(&self, new_comment: NewComment) -> Result<comment::Model, AppError> {
        if new_comment.text.trim().is_empty() {
            return Err(AppError::validation("comment text must not be empty"));
        }

        self.db
            .transaction::<_, _, AppError>(|txn| {
                Box::pin(async move { append_comment(txn, new_comment).await })
            })
            .await
            .into_raw_result()
    }

    /// Start the quality inspection of a record.
    pub async fn start(&self, id: i64, user: &str) -> Result<quality_record::Model, AppError> {
        self.transition(id, user, Transition::Start).await
    }

    /// Finish the quality inspection of a previously started record.
    pub async fn finish(&self, id: i64, user: &str) -> Result<quality_record::Model, AppError> {
        self.transition(id, user, Transition::Finish).await
    }

    async fn transition(
        &self,
        id: i64,
        user: &str,
        transition: Transition,
    ) -> Result<quality_record::Model, AppError> {
        let user = user.to_owned();

        let record = self
            .db
            .transaction::<_, _, AppError>(|txn| {
                Box::pin(async move {
                    let record = find_record(txn, id).await?;

                    transition.check(&record)?;

                    let chip_id = record.chip_id.ok_or_else(|| {
                        AppError::validation(format!("record id={id} has no chip identifier"))
                    })?;

                    let mut update = quality_record::Entity::update_many()
                        .col_expr(transition.column(), Expr::cust("CURRENT_TIMESTAMP"))
                        .col_expr(
                            quality_record::Column::Status,
                            Expr::value(transition.status()),
                        )
                        .filter(quality_record::Column::Id.eq(id))
                        .filter(transition.column().is_null());

                    if transition == Transition::Finish {
                        update = update.filter(quality_record::Column::StartTime.is_not_null());
                    }

                    if update.exec(txn).await?.rows_affected == 0 {
                        return Err(transition.conflict());
                    }

                    append_comment(
                        txn,
                        NewComment {
                            chip_id,
                            status: transition.status().to_owned(),
                            author: user,
                            text: transition.comment().to_owned(),
                        },
                    )
                    .await?;

                    find_record(txn, id).await
                })
            })
            .await
            .into_raw_result()?;

        info!(id, status = transition.status(), "quality record transitioned");

        Ok(record)
    }
}

async fn find_record<C: ConnectionTrait>(
    db: &C,
    id: i64,
) -> Result<quality_record::Model, AppError> {
    quality_record::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::not_found(format!("id={id}")))
}

/// Insert a comment with the next available line number and read it back.
async fn append_comment<C: ConnectionTrait>(
    db: &C,
    new_comment: NewComment,
) -> Result<comment::Model, AppError> {
    let chip_id = new_comment.chip_id;
    let line = comment::next_line(db, chip_id).await?;

    comment::Entity::insert(comment::ActiveModel {
        chip_id: db::ActiveValue::Set(chip_id),
        line: db::ActiveValue::Set(line),
        status: db::ActiveValue::Set(new_comment.status),
        author: db::ActiveValue::Set(new_comment.author),
        text: db::ActiveValue::Set(new_comment.text),
        ..Default::default()
    })
    .exec_without_returning(db)
    .await?;

    let model = comment::Entity::find_by_id((chip_id, line))
        .one(db)
        .await?
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!("comment chip_id={chip_id} line={line}"))
        })?;

    info!(chip_id, line, "comment appended");

    Ok(model)
}
