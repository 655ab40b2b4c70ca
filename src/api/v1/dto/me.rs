use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupsResponse {
    pub groups: Vec<String>,
}
