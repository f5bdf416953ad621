//! Entity models.
//!
//! Each submodule contains a `FromRow` row struct matching the database
//! table and a `New*` record carrying the insertable columns. The `New*`
//! record doubles as the update shape: modifying an entity overwrites
//! every mutable column, it is not a partial patch.

pub mod movie;
pub mod screening;
