pub mod build;
pub mod nav;
pub mod routes;
pub mod serve;
pub mod validate;
