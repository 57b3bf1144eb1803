diesel::table! {
    teams (id) {
        id -> Integer,
        name -> Text,
    }
}

diesel::table! {
    members (id) {
        id -> Integer,
        username -> Nullable<Text>,
        age -> Integer,
        team_id -> Nullable<Integer>,
    }
}

diesel::joinable!(members -> teams (team_id));

diesel::allow_tables_to_appear_in_same_query!(members, teams);
