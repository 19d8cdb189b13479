//! Internal Diesel row structs.
//!
//! Implementation details of the persistence layer; conversions into domain
//! types happen here so repositories stay thin.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{Photo, PhotoId, User, UserAccount, UserId};

use super::schema::{photos, users};

/// Row read from `users` without the password column.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Row read from `users` for login, password hash included.
#[derive(Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserAccountRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserAccountRow> for UserAccount {
    fn from(row: UserAccountRow) -> Self {
        Self {
            user: User {
                id: UserId::new(row.id),
                username: row.username,
                email: row.email,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            password_hash: row.password,
        }
    }
}

/// Insertable user; timestamps default in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Row read from `photos`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = photos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PhotoRow {
    pub id: i32,
    pub title: String,
    pub caption: String,
    pub image_url: String,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PhotoRow> for Photo {
    fn from(row: PhotoRow) -> Self {
        Self {
            id: PhotoId::new(row.id),
            title: row.title,
            caption: row.caption,
            image_url: row.image_url,
            owner_id: UserId::new(row.owner_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable photo; timestamps default in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = photos)]
pub(crate) struct NewPhotoRow<'a> {
    pub title: &'a str,
    pub caption: &'a str,
    pub image_url: &'a str,
    pub owner_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn photo_rows_convert_field_for_field() {
        let now = Utc::now();
        let photo = Photo::from(PhotoRow {
            id: 7,
            title: "Default Photo".to_owned(),
            caption: "DEFAULT PHOTO http://image.com/defaultphoto.png".to_owned(),
            image_url: "http://image.com/defaultphoto.png".to_owned(),
            owner_id: 1,
            created_at: now,
            updated_at: now,
        });
        assert_eq!(photo.id, PhotoId::new(7));
        assert_eq!(photo.owner_id, UserId::new(1));
        assert_eq!(photo.created_at, now);
    }

    #[rstest]
    fn user_rows_convert_field_for_field() {
        let now = Utc::now();
        let user = User::from(UserRow {
            id: 1,
            username: "acong".to_owned(),
            email: "acong@mail.com".to_owned(),
            created_at: now,
            updated_at: now,
        });
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email, "acong@mail.com");
    }

    #[rstest]
    fn account_rows_keep_the_password_hash_apart() {
        let now = Utc::now();
        let account = UserAccount::from(UserAccountRow {
            id: 1,
            username: "acong".to_owned(),
            email: "acong@mail.com".to_owned(),
            password: "$argon2id$v=19$hash".to_owned(),
            created_at: now,
            updated_at: now,
        });
        assert_eq!(account.user.id, UserId::new(1));
        assert_eq!(account.password_hash, "$argon2id$v=19$hash");
        let rendered = serde_json::to_string(&account.user).expect("serialise user");
        assert!(!rendered.contains("argon2"));
    }
}
