//! 凭证与令牌
//!
//! - `BcryptPasswordHasher`：基于 bcrypt 的口令哈希；
//! - `TokenIssuer`/`JwtTokenIssuer`：签发与校验 HS256 JWT。
//!
mod bcrypt_hasher;
mod token;

pub use bcrypt_hasher::BcryptPasswordHasher;
pub use token::{Claims, JwtTokenIssuer, TokenIssuer};
