//! Member repository: CRUD, dynamic search, paginated search, and bulk
//! mutation.

use diesel::prelude::*;
use tracing::debug;

use crate::condition::MemberSearchCondition;
use crate::models::{Member, MemberWithTeam, NewMember};
use crate::pagination::{Page, PageRequest};
use crate::schema::{members, teams};

type MemberWithTeamColumns = (
    members::id,
    members::username,
    members::age,
    diesel::dsl::Nullable<teams::id>,
    diesel::dsl::Nullable<teams::name>,
);

fn member_with_team_columns() -> MemberWithTeamColumns {
    (
        members::id,
        members::username,
        members::age,
        teams::id.nullable(),
        teams::name.nullable(),
    )
}

/// Repository for member operations.
pub struct MemberRepository;

impl MemberRepository {
    /// Inserts a member and returns the stored row.
    pub fn insert(conn: &mut SqliteConnection, new_member: &NewMember) -> QueryResult<Member> {
        diesel::insert_into(members::table)
            .values(new_member)
            .returning(Member::as_returning())
            .get_result(conn)
    }

    /// Finds a member by id.
    pub fn find_by_id(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Member>> {
        members::table
            .find(id)
            .select(Member::as_select())
            .first(conn)
            .optional()
    }

    /// Lists all members in insertion order.
    pub fn find_all(conn: &mut SqliteConnection) -> QueryResult<Vec<Member>> {
        members::table
            .order(members::id.asc())
            .select(Member::as_select())
            .load(conn)
    }

    /// Finds members by exact username.
    pub fn find_by_username(
        conn: &mut SqliteConnection,
        username: &str,
    ) -> QueryResult<Vec<Member>> {
        members::table
            .filter(members::username.eq(username))
            .order(members::id.asc())
            .select(Member::as_select())
            .load(conn)
    }

    /// Counts all members.
    pub fn count(conn: &mut SqliteConnection) -> QueryResult<i64> {
        members::table.count().get_result(conn)
    }

    /// Moves a member onto a team.
    ///
    /// This is the only write path for the member/team association; the
    /// team-side collection is derived from the same column, so both views
    /// stay consistent. Returns the number of updated rows (0 when no such
    /// member exists).
    pub fn assign_team(
        conn: &mut SqliteConnection,
        member_id: i32,
        team_id: i32,
    ) -> QueryResult<usize> {
        diesel::update(members::table.find(member_id))
            .set(members::team_id.eq(team_id))
            .execute(conn)
    }

    /// Searches members with their team, building the WHERE clause from
    /// conditional filters on a boxed query.
    pub fn search_filtered(
        conn: &mut SqliteConnection,
        cond: &MemberSearchCondition,
    ) -> QueryResult<Vec<MemberWithTeam>> {
        debug!(condition = ?cond, "searching members (boxed filters)");

        let mut query = members::table.left_join(teams::table).into_boxed();

        if let Some(username) = cond.username.as_deref() {
            query = query.filter(members::username.eq(username));
        }
        if let Some(team_name) = cond.team_name.as_deref() {
            query = query.filter(teams::name.eq(team_name));
        }
        if let Some(age) = cond.age_goe {
            query = query.filter(members::age.ge(age));
        }
        if let Some(age) = cond.age_loe {
            query = query.filter(members::age.le(age));
        }

        query
            .order(members::id.asc())
            .select(member_with_team_columns())
            .load(conn)
    }

    /// Searches members with their team using one composed predicate.
    ///
    /// Behaviorally identical to [`Self::search_filtered`]; the predicate
    /// pieces are reusable in other queries.
    pub fn search(
        conn: &mut SqliteConnection,
        cond: &MemberSearchCondition,
    ) -> QueryResult<Vec<MemberWithTeam>> {
        debug!(condition = ?cond, "searching members");

        members::table
            .left_join(teams::table)
            .filter(cond.to_predicate())
            .order(members::id.asc())
            .select(member_with_team_columns())
            .load(conn)
    }

    /// Searches one page of members; always issues a separate count query
    /// for the total.
    pub fn search_page(
        conn: &mut SqliteConnection,
        cond: &MemberSearchCondition,
        request: PageRequest,
    ) -> QueryResult<Page<MemberWithTeam>> {
        debug!(condition = ?cond, page = request.page(), size = request.size(), "searching members page");

        let content = Self::page_content(conn, cond, request)?;
        let total = Self::count_matching(conn, cond)?;

        Ok(Page::new(content, request, total))
    }

    /// Searches one page of members, skipping the count query whenever the
    /// fetched page shape already determines the total.
    pub fn search_page_optimized(
        conn: &mut SqliteConnection,
        cond: &MemberSearchCondition,
        request: PageRequest,
    ) -> QueryResult<Page<MemberWithTeam>> {
        debug!(condition = ?cond, page = request.page(), size = request.size(), "searching members page (deferred count)");

        let content = Self::page_content(conn, cond, request)?;

        Page::from_parts(content, request, || Self::count_matching(conn, cond))
    }

    fn page_content(
        conn: &mut SqliteConnection,
        cond: &MemberSearchCondition,
        request: PageRequest,
    ) -> QueryResult<Vec<MemberWithTeam>> {
        members::table
            .left_join(teams::table)
            .filter(cond.to_predicate())
            .order(members::id.asc())
            .limit(request.size())
            .offset(request.offset())
            .select(member_with_team_columns())
            .load(conn)
    }

    fn count_matching(
        conn: &mut SqliteConnection,
        cond: &MemberSearchCondition,
    ) -> QueryResult<i64> {
        members::table
            .left_join(teams::table)
            .filter(cond.to_predicate())
            .count()
            .get_result(conn)
    }

    /// Renames every member younger than `age`. Returns affected rows.
    pub fn rename_younger_than(
        conn: &mut SqliteConnection,
        age: i32,
        username: &str,
    ) -> QueryResult<usize> {
        diesel::update(members::table.filter(members::age.lt(age)))
            .set(members::username.eq(username))
            .execute(conn)
    }

    /// Adds `amount` to every member's age. Returns affected rows.
    pub fn increment_ages(conn: &mut SqliteConnection, amount: i32) -> QueryResult<usize> {
        diesel::update(members::table)
            .set(members::age.eq(members::age + amount))
            .execute(conn)
    }

    /// Multiplies every member's age by `factor`. Returns affected rows.
    pub fn scale_ages(conn: &mut SqliteConnection, factor: i32) -> QueryResult<usize> {
        diesel::update(members::table)
            .set(members::age.eq(members::age * factor))
            .execute(conn)
    }

    /// Deletes every member older than `age`. Returns affected rows.
    pub fn delete_older_than(conn: &mut SqliteConnection, age: i32) -> QueryResult<usize> {
        diesel::delete(members::table.filter(members::age.gt(age))).execute(conn)
    }
}
