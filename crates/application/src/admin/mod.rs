//! Administrative user management.

mod delete_user;

pub use delete_user::{DeleteUser, DeleteUserInput, DeletionError};
