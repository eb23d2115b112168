pub mod bearer;
pub mod caller;
pub mod claims;
pub mod error;
pub mod jwt_validator;

pub use bearer::bearer_token;
pub use caller::Caller;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
