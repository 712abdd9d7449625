//! Append-only comment log attached to a vehicle chip.
//!
//! Comment lines are numbered per chip, starting from one. The pair of
//! chip identifier and line number is the primary key, so two comments
//! of the same chip can never share a line number.

use sea_orm::{entity::prelude::*, sea_query::Expr, QuerySelect};

/// Comment model.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "quality_comments")]
pub struct Model {
    /// Vehicle chip identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub chip_id: i64,

    /// Per-chip sequence number.
    #[sea_orm(primary_key, auto_increment = false)]
    pub line: i32,

    /// Store-side creation timestamp.
    pub created_at: TimeDateTime,

    /// Status label at the moment of writing.
    pub status: String,

    /// Author identifier.
    pub author: String,

    /// Comment text.
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Find the line number the next comment of the provided chip should receive.
///
/// Returns one more than the highest existing line, or `1`
/// if the chip has no comments yet.
///
/// This is a plain read, run it inside of the same transaction
/// that inserts the comment.
pub async fn next_line<C: ConnectionTrait>(db: &C, chip_id: i64) -> Result<i32, DbErr> {
    let last_line = Entity::find()
        .select_only()
        .column_as(Expr::col(Column::Line).max(), "last_line")
        .filter(Column::ChipId.eq(chip_id))
        .into_tuple::<Option<i32>>()
        .one(db)
        .await?
        .flatten();

    last_line
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| DbErr::Custom(format!("comment line overflow for chip_id={chip_id}")))
}
