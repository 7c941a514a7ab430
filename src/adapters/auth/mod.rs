//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `TokenIssuer` ports:
//!
//! - `jwt` - HS256 bearer tokens with blacklist-aware validation
//! - `mock` - Test implementations that don't require signing keys

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtTokenService};
pub use mock::{MockSessionValidator, MockTokenIssuer};
