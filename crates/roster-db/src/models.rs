use diesel::prelude::*;
use serde::Serialize;

use crate::schema::{members, teams};

#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = teams)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Team {
    pub id: i32,
    pub name: String,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Associations, Serialize,
)]
#[diesel(table_name = members)]
#[diesel(belongs_to(Team))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Member {
    pub id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = teams)]
pub struct NewTeam<'a> {
    pub name: &'a str,
}

#[derive(Debug, Default, Insertable)]
#[diesel(table_name = members)]
pub struct NewMember<'a> {
    pub username: Option<&'a str>,
    pub age: i32,
    pub team_id: Option<i32>,
}

/// Read model carrying only the member fields callers usually render.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize)]
pub struct MemberSummary {
    pub username: Option<String>,
    pub age: i32,
}

/// Member row joined with its (optional) team, flattened for listing.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Serialize)]
pub struct MemberWithTeam {
    pub member_id: i32,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}
