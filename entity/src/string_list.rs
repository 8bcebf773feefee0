use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// List of strings persisted as a JSON array column.
///
/// Used for the `films`, `species`, `starships`, `vehicles` and `residents` columns so the
/// same schema works on PostgreSQL and SQLite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<StringList> for Vec<String> {
    fn from(list: StringList) -> Self {
        list.0
    }
}
