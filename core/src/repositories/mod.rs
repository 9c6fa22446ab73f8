//! Repository traits abstracting the persistence layer.

pub mod account;

pub use account::AccountRepository;
pub use account::MockAccountRepository;
