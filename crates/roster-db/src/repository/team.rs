//! Team repository.

use diesel::prelude::*;

use crate::models::{Member, NewTeam, Team};
use crate::schema::{members, teams};

/// Repository for team operations.
pub struct TeamRepository;

impl TeamRepository {
    /// Inserts a team and returns the stored row.
    pub fn insert(conn: &mut SqliteConnection, new_team: &NewTeam) -> QueryResult<Team> {
        diesel::insert_into(teams::table)
            .values(new_team)
            .returning(Team::as_returning())
            .get_result(conn)
    }

    /// Finds a team by id.
    pub fn find_by_id(conn: &mut SqliteConnection, id: i32) -> QueryResult<Option<Team>> {
        teams::table
            .find(id)
            .select(Team::as_select())
            .first(conn)
            .optional()
    }

    /// Lists all teams ordered by name.
    pub fn find_all(conn: &mut SqliteConnection) -> QueryResult<Vec<Team>> {
        teams::table
            .order(teams::name.asc())
            .select(Team::as_select())
            .load(conn)
    }

    /// Lists the members currently assigned to `team`.
    ///
    /// The member collection is derived from `members.team_id` on every
    /// call; there is no stored reverse collection that could drift.
    pub fn members_of(conn: &mut SqliteConnection, team: &Team) -> QueryResult<Vec<Member>> {
        Member::belonging_to(team)
            .order(members::id.asc())
            .select(Member::as_select())
            .load(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::TeamRepository;
    use crate::connection::DbConnection;
    use crate::models::{NewMember, NewTeam};
    use crate::repository::MemberRepository;

    #[test]
    fn insert_and_find_teams() {
        let mut db = DbConnection::open_in_memory().unwrap();
        let conn = db.conn();

        let team_b = TeamRepository::insert(conn, &NewTeam { name: "teamB" }).unwrap();
        let team_a = TeamRepository::insert(conn, &NewTeam { name: "teamA" }).unwrap();

        let found = TeamRepository::find_by_id(conn, team_a.id).unwrap().unwrap();
        assert_eq!(found, team_a);
        assert!(TeamRepository::find_by_id(conn, team_b.id + 100)
            .unwrap()
            .is_none());

        let all = TeamRepository::find_all(conn).unwrap();
        assert_eq!(all, vec![team_a, team_b]);
    }

    #[test]
    fn members_of_returns_the_current_roster() {
        let mut db = DbConnection::open_in_memory().unwrap();
        let conn = db.conn();

        let team_a = TeamRepository::insert(conn, &NewTeam { name: "teamA" }).unwrap();
        let team_b = TeamRepository::insert(conn, &NewTeam { name: "teamB" }).unwrap();

        for (username, team_id) in [
            ("member1", team_a.id),
            ("member2", team_a.id),
            ("member3", team_b.id),
        ] {
            MemberRepository::insert(
                conn,
                &NewMember {
                    username: Some(username),
                    age: 20,
                    team_id: Some(team_id),
                },
            )
            .unwrap();
        }

        let roster = TeamRepository::members_of(conn, &team_a).unwrap();
        let usernames: Vec<_> = roster.iter().filter_map(|m| m.username.as_deref()).collect();
        assert_eq!(usernames, vec!["member1", "member2"]);

        for member in &roster {
            assert_eq!(member.team_id, Some(team_a.id));
        }
    }
}
