//! User Context

mod entities;
mod errors;
mod value_objects;

pub use entities::User;
pub use errors::EmailError;
pub use value_objects::Email;
