use crate::entities::{courses, orders};
use models::course::CourseFields;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

pub struct CourseService;

impl CourseService {
    pub async fn create(
        db: &DatabaseConnection,
        fields: CourseFields,
    ) -> Result<courses::Model, DbErr> {
        courses::ActiveModel {
            title: Set(fields.title),
            mentor: Set(fields.mentor),
            description: Set(fields.description),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Get a course by ID, `None` if it does not exist
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<courses::Model>, DbErr> {
        courses::Entity::find_by_id(id).one(db).await
    }

    /// All courses in insertion order
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<courses::Model>, DbErr> {
        courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(db)
            .await
    }

    /// Overwrites every field of an existing course
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        fields: CourseFields,
    ) -> Result<Option<courses::Model>, DbErr> {
        let txn = db.begin().await?;

        let Some(course) = courses::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut course: courses::ActiveModel = course.into();
        course.title = Set(fields.title);
        course.mentor = Set(fields.mentor);
        course.description = Set(fields.description);

        let course = course.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(course))
    }

    /// Deletes a course together with its orders
    ///
    /// Returns the number of orders removed, or `None` if the course does not exist.
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<Option<u64>, DbErr> {
        let txn = db.begin().await?;

        let Some(course) = courses::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let removed = orders::Entity::delete_many()
            .filter(orders::Column::CourseId.eq(course.id))
            .exec(&txn)
            .await?
            .rows_affected;

        course.delete(&txn).await?;
        txn.commit().await?;

        Ok(Some(removed))
    }
}

#[cfg(test)]
mod tests {
    use super::CourseService;
    use crate::{db::test_connection, services::order::OrderService};
    use models::{course::CourseFields, order::OrderFields};

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let db = test_connection().await;
        let fields = CourseFields::new("Intro", "A. Smith", "Basics");

        let created = CourseService::create(&db, fields.clone()).await.unwrap();
        let found = CourseService::find_by_id(&db, created.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.title, fields.title);
        assert_eq!(found.mentor, fields.mentor);
        assert_eq!(found.description, fields.description);
    }

    #[tokio::test]
    async fn test_empty_fields_are_accepted() {
        let db = test_connection().await;

        let created = CourseService::create(&db, CourseFields::new("", "", ""))
            .await
            .unwrap();

        assert_eq!(created.title, "");
    }

    #[tokio::test]
    async fn test_long_fields_are_stored_whole() {
        let db = test_connection().await;
        let title = "t".repeat(300);
        let description = "Всё о курсе. ".repeat(100);

        let created = CourseService::create(&db, CourseFields::new(&title, "M", &description))
            .await
            .unwrap();
        let found = CourseService::find_by_id(&db, created.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.title, title);
        assert_eq!(found.description, description);
    }

    #[tokio::test]
    async fn test_find_missing_course() {
        let db = test_connection().await;
        assert!(CourseService::find_by_id(&db, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let db = test_connection().await;
        let created = CourseService::create(&db, CourseFields::new("Old", "Mentor", "Desc"))
            .await
            .unwrap();

        let updated = CourseService::update(
            &db,
            created.id,
            CourseFields::new("New", "Other", "Changed"),
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "New");

        let all = CourseService::find_all(&db).await.unwrap();
        assert_eq!(all, vec![updated]);
    }

    #[tokio::test]
    async fn test_update_missing_course() {
        let db = test_connection().await;
        let result = CourseService::update(&db, 7, CourseFields::new("a", "b", "c"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_cascades_to_orders() {
        let db = test_connection().await;
        let doomed = CourseService::create(&db, CourseFields::new("Doomed", "M", "D"))
            .await
            .unwrap();
        let kept = CourseService::create(&db, CourseFields::new("Kept", "M", "D"))
            .await
            .unwrap();

        let mut doomed_orders = Vec::new();
        for name in ["ann lee", "bob ross"] {
            let order = OrderService::create(&db, doomed.id, OrderFields::new(name, "1", "a@b.c"))
                .await
                .unwrap()
                .unwrap();
            doomed_orders.push(order.id);
        }
        let kept_order = OrderService::create(&db, kept.id, OrderFields::new("cy", "2", "c@d.e"))
            .await
            .unwrap()
            .unwrap();

        let removed = CourseService::delete(&db, doomed.id).await.unwrap();
        assert_eq!(removed, Some(2));

        assert!(CourseService::find_by_id(&db, doomed.id).await.unwrap().is_none());
        for id in doomed_orders {
            assert!(OrderService::find_by_id(&db, id).await.unwrap().is_none());
        }
        assert!(OrderService::find_by_id(&db, kept_order.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_course() {
        let db = test_connection().await;
        assert_eq!(CourseService::delete(&db, 1).await.unwrap(), None);
    }
}
