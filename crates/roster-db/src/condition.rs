//! Dynamic search conditions for member queries.
//!
//! Each optional field contributes one predicate when present and nothing
//! when absent; the combined expression is built at runtime and handed to
//! the query as a single boxed filter.

use diesel::dsl;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Nullable};
use diesel::sqlite::Sqlite;
use serde::{Deserialize, Serialize};

use crate::schema::{members, teams};

/// Query source every member search runs against: members left-joined to
/// their (optional) team.
pub type MemberTeamSource = dsl::LeftJoinQuerySource<members::table, teams::table>;

/// A dynamically composed predicate over the member/team join.
///
/// The SQL type is `Nullable<Bool>` because the underlying columns
/// (`members.username`, and `teams.name` seen through the left join) are
/// themselves nullable, so their comparisons yield a nullable boolean.
pub type MemberPredicate =
    Box<dyn BoxableExpression<MemberTeamSource, Sqlite, SqlType = Nullable<Bool>>>;

/// Optional search filters; absent fields are dropped, not matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Folds the present fields into a single AND predicate.
    ///
    /// An empty condition yields a neutral `TRUE` predicate, so the query
    /// matches every row.
    pub fn to_predicate(&self) -> MemberPredicate {
        let clauses = [
            self.username.as_deref().map(username_eq),
            self.team_name.as_deref().map(team_name_eq),
            self.age_goe.map(age_goe),
            self.age_loe.map(age_loe),
        ];

        clauses
            .into_iter()
            .flatten()
            .reduce(|lhs, rhs| Box::new(lhs.and(rhs)) as MemberPredicate)
            .unwrap_or_else(|| Box::new(dsl::sql::<Nullable<Bool>>("TRUE")))
    }
}

fn username_eq(username: &str) -> MemberPredicate {
    Box::new(members::username.eq(username.to_owned()))
}

fn team_name_eq(team_name: &str) -> MemberPredicate {
    Box::new(teams::name.nullable().eq(team_name.to_owned()))
}

fn age_goe(age: i32) -> MemberPredicate {
    Box::new(members::age.ge(age).nullable())
}

fn age_loe(age: i32) -> MemberPredicate {
    Box::new(members::age.le(age).nullable())
}
