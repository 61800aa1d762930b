//! Identity assertion signing: the HS256 codec and its secret.

mod jwt;
mod secret;

pub use jwt::JwtTokenCodec;
pub use secret::{BuildMode, TOKEN_SECRET_MIN_LEN, TokenSecret, TokenSecretError, load_token_secret};
