//! Repository pattern implementations for database operations.
//!
//! Each repository handles operations for one aggregate of the roster
//! domain:
//!
//! - [`MemberRepository`] - member CRUD, dynamic search, pagination, bulk
//!   mutation
//! - [`TeamRepository`] - team CRUD and the team-side member collection

pub mod member;
pub mod team;

pub use member::MemberRepository;
pub use team::TeamRepository;
