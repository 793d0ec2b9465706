use crate::entities::{courses, orders};
use models::order::OrderFields;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

pub struct OrderService;

impl OrderService {
    /// Places an order for a course
    ///
    /// Returns `None` without writing anything when the course does not exist.
    pub async fn create(
        db: &DatabaseConnection,
        course_id: i32,
        fields: OrderFields,
    ) -> Result<Option<orders::Model>, DbErr> {
        let txn = db.begin().await?;

        if courses::Entity::find_by_id(course_id)
            .one(&txn)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        let order = orders::ActiveModel {
            course_id: Set(course_id),
            full_name: Set(fields.full_name),
            phone: Set(fields.phone),
            email: Set(fields.email),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(Some(order))
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<orders::Model>, DbErr> {
        orders::Entity::find_by_id(id).one(db).await
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<orders::Model>, DbErr> {
        orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(db)
            .await
    }

    /// Orders placed for one course, oldest first
    pub async fn find_by_course(
        db: &DatabaseConnection,
        course_id: i32,
    ) -> Result<Vec<orders::Model>, DbErr> {
        orders::Entity::find()
            .filter(orders::Column::CourseId.eq(course_id))
            .order_by_asc(orders::Column::Id)
            .all(db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::OrderService;
    use crate::{db::test_connection, services::course::CourseService};
    use models::{course::CourseFields, order::OrderFields};

    #[tokio::test]
    async fn test_order_references_course() {
        let db = test_connection().await;
        let course = CourseService::create(&db, CourseFields::new("Intro", "A. Smith", "Basics"))
            .await
            .unwrap();

        let order = OrderService::create(
            &db,
            course.id,
            OrderFields::new("jane doe", "555", "j@x.com"),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(order.course_id, course.id);
        assert_eq!(order.full_name, "Jane Doe");
        assert_eq!(
            OrderService::find_by_course(&db, course.id).await.unwrap(),
            vec![order.clone()]
        );
        assert_eq!(OrderService::find_all(&db).await.unwrap(), vec![order]);
    }

    #[tokio::test]
    async fn test_order_for_missing_course() {
        let db = test_connection().await;

        let order = OrderService::create(&db, 99, OrderFields::new("x", "y", "z"))
            .await
            .unwrap();

        assert!(order.is_none());
        assert!(OrderService::find_all(&db).await.unwrap().is_empty());
    }
}
