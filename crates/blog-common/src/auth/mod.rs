//! Authentication utilities

mod basic;
mod jwt;
mod password;

pub use basic::AdminCredentials;
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{hash_password, validate_password_length, verify_password};
