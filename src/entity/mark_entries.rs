//! 成绩明细实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "mark_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub marks_id: i64,
    // MST_I / MST_II / FINAL
    pub exam: String,
    pub subject_id: i64,
    pub marks: f64,
    pub max_marks: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::marks::Entity",
        from = "Column::MarksId",
        to = "super::marks::Column::Id"
    )]
    Marks,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
}

impl Related<super::marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
