use sea_orm::{
    entity::prelude::*,
    sea_query::{Condition, Expr, Func, LikeExpr},
    DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub class_name: String,
    pub session: String,
    pub created_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Escape `LIKE` metacharacters so the fragment matches literally.
pub fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `LOWER(first_name) LIKE p OR LOWER(last_name) LIKE p`, with `p` the
/// lowercased, escaped fragment wrapped in `%`.
pub fn name_contains(fragment: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));
    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col(Column::FirstName)))
                .like(LikeExpr::new(pattern.clone()).escape('\\')),
        )
        .add(
            Expr::expr(Func::lower(Expr::col(Column::LastName)))
                .like(LikeExpr::new(pattern).escape('\\')),
        )
}

pub async fn insert(db: &DatabaseConnection, model: Model) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(model.id),
        first_name: Set(model.first_name),
        last_name: Set(model.last_name),
        date_of_birth: Set(model.date_of_birth),
        class_name: Set(model.class_name),
        session: Set(model.session),
        created_date: Set(model.created_date),
    };
    Ok(am.insert(db).await?)
}

/// All rows, oldest id first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn search_name(db: &DatabaseConnection, fragment: &str) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .filter(name_contains(fragment))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn escape_like_quotes_metacharacters() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("Ali"), "Ali");
    }

    #[test]
    fn name_search_ors_both_columns() {
        let sql = Entity::find()
            .filter(name_contains("ALI"))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("first_name")"#), "{sql}");
        assert!(sql.contains(r#"LOWER("last_name")"#), "{sql}");
        assert!(sql.contains(" OR "), "{sql}");
        assert!(sql.contains("'%ali%'"), "{sql}");
    }
}
