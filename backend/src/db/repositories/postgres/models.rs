use diesel::prelude::*;

use super::schema::leaderboard_entries;

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = leaderboard_entries)]
pub struct NewEntryRow {
    pub pk: i64,
    pub sk: String,
}
