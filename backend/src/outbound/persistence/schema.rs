//! Diesel table definitions.
//!
//! Must stay in step with the DDL in [`super::bootstrap`].

diesel::table! {
    /// One row per employee.
    employees (id) {
        /// Storage-assigned primary key (`BIGSERIAL`).
        id -> Int8,
        first_name -> Varchar,
        last_name -> Varchar,
        /// Not unique.
        email -> Varchar,
    }
}
