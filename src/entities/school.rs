use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub description: String,
}

impl Entity for School {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Resource for School {
    const TYPE_NAME: &'static str = "School";
    const PATH: &'static str = "schools";
    const CLIENT_SUPPLIED_ID: bool = false;

    type CreateParams = NewSchool;

    fn from_params(params: NewSchool) -> Self {
        Self {
            id: 0,
            name: params.name,
            address: params.address,
            description: params.description,
        }
    }
}
