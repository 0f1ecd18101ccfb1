pub mod auth_adapter_postgres;
pub mod sea_orm_entity;

pub use auth_adapter_postgres::AuthAdapterPostgres;
