use crate::entities::users;
use models::{credentials::Credentials, validation::FieldError};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

/// Outcome of a registration attempt
#[derive(Debug)]
pub enum Registration {
    Created(users::Model),
    Rejected(Vec<FieldError>),
}

pub struct UserService;

impl UserService {
    const USERNAME_TAKEN: &'static str = "This username is taken, choose another one.";

    pub async fn create(
        db: &DatabaseConnection,
        credentials: Credentials,
    ) -> Result<users::Model, DbErr> {
        users::ActiveModel {
            username: Set(credentials.username),
            password: Set(credentials.password),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Loads the user a session points at
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(db).await
    }

    /// Exact, case-sensitive username lookup
    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(db)
            .await
    }

    pub async fn username_taken(db: &DatabaseConnection, username: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
        users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(db)
            .await
    }

    /// Validates the credentials and inserts the user if they pass
    ///
    /// Validation problems, including a username that is already taken, come back
    /// as `Registration::Rejected`; only storage failures are errors.
    pub async fn register(
        db: &DatabaseConnection,
        credentials: Credentials,
    ) -> Result<Registration, DbErr> {
        let mut errors = credentials.validate();

        let username_valid = errors.iter().all(|error| error.field != "username");
        if username_valid && Self::username_taken(db, &credentials.username).await? {
            errors.push(FieldError::new("username", Self::USERNAME_TAKEN));
        }

        if !errors.is_empty() {
            return Ok(Registration::Rejected(errors));
        }

        match Self::create(db, credentials).await {
            Ok(user) => Ok(Registration::Created(user)),
            // Lost a race with a concurrent registration of the same name
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(Registration::Rejected(vec![FieldError::new(
                    "username",
                    Self::USERNAME_TAKEN,
                )]))
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the user when the username exists and the password matches exactly
    pub async fn authenticate(
        db: &DatabaseConnection,
        credentials: &Credentials,
    ) -> Result<Option<users::Model>, DbErr> {
        let user = Self::find_by_username(db, &credentials.username).await?;
        Ok(user.filter(|user| user.password == credentials.password))
    }
}
