//! Service layer.
//!
//! One service per resource, orchestrating ID parsing, input validation,
//! repository calls and mapper invocations. Services are zero-sized structs
//! with async methods taking `&DbPool`, mirroring the repository layer.

pub mod movie;
pub mod screening;

pub use movie::MovieService;
pub use screening::ScreeningService;
