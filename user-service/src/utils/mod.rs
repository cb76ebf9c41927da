mod extract;
mod password;

pub use extract::ValidatedJson;
pub use password::{hash_password, Password, PasswordHashString};
