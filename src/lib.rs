//! Thin synchronous shim over the `postgres` client library.
//!
//! The crate owns exactly one piece of decision logic: translating named
//! connection parameters into the client library's connection-string form
//! and enforcing the open/close lifecycle around it. Everything else
//! (wire protocol, authentication, result encoding) is delegated to the
//! wrapped client.
//!
//! Architecture:
//! - `connection`: parameter resolution, lazy connect, and the
//!   query/fetch/escape/transaction passthroughs
//! - `error`: closed set of failure variants
//!
//! # Example
//!
//! ```no_run
//! use pgbridge::{PgConfig, PgConnection};
//!
//! fn main() -> pgbridge::PgResult<()> {
//!     let config = PgConfig {
//!         host: "localhost".into(),
//!         user: "postgres".into(),
//!         pass: "secret".into(),
//!         database: "app".into(),
//!         ..Default::default()
//!     };
//!
//!     let mut conn = PgConnection::new(config)?;
//!     conn.open()?;
//!
//!     let mut result = conn.query("SELECT id, name FROM users")?;
//!     while let Some(row) = result.fetch() {
//!         println!("{:?}", row.get("name"));
//!     }
//!     result.free();
//!
//!     conn.close()
//! }
//! ```

mod connection;
mod error;

#[cfg(test)]
mod tests;

pub use connection::{PgConfig, PgConnection, QueryResult, Row};
pub use error::{PgError, PgResult};

// Re-exported so adopters of an established client and users of the raw
// handle escape hatch do not need a direct dependency on the client crate.
pub use postgres::Client;
