//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match the deployed tables exactly; `diesel print-schema` against a
//! live database regenerates them. Migrations are owned by the deployment,
//! not by this service.

diesel::table! {
    /// Registered accounts. Rows are written by the registration flow.
    users (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        /// Already-hashed password secret; never selected by this service.
        password -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Photo records owned by users.
    photos (id) {
        id -> Int4,
        title -> Varchar,
        caption -> Text,
        image_url -> Text,
        owner_id -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(photos -> users (owner_id));
diesel::allow_tables_to_appear_in_same_query!(photos, users);
