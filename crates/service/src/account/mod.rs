//! Account module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Account, AccountInput};
pub use repository::AccountRepository;
pub use service::AccountService;
