//! Service layer providing account CRUD operations on top of models.
//! - Separates business logic from data access through `AccountRepository`.
//! - Reuses validation and entity definitions in the `models` crate.

pub mod errors;
pub mod account;
#[cfg(test)]
pub mod test_support;
