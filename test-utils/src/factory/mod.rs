//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand for quick default creation. Defaults are unique per call so
//! factories can be used repeatedly without tripping unique constraints.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (manager, project) = factory::helpers::create_project_with_manager(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .username("root")
//!     .role("Admin")
//!     .password("Secret123")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with hashed passwords
//! - `project` - Projects and developer assignments
//! - `ticket` - Tickets and developer assignments
//! - `helpers` - Unique id generation and dependency chains

pub mod helpers;
pub mod project;
pub mod ticket;
pub mod user;

pub use project::{assign_project_developer, create_project};
pub use ticket::{assign_ticket_developer, create_ticket};
pub use user::create_user;
