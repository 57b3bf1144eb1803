pub mod condition;
pub mod connection;
pub mod error;
pub mod functions;
pub mod migration;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod schema;

pub use condition::{MemberPredicate, MemberSearchCondition};
pub use connection::DbConnection;
pub use error::{DbError, Result};
pub use models::{Member, MemberSummary, MemberWithTeam, NewMember, NewTeam, Team};
pub use pagination::{Page, PageRequest};
pub use repository::{MemberRepository, TeamRepository};
