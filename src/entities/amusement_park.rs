use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmusementPark {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Deserialize)]
pub struct NewAmusementPark {
    pub name: String,
    pub address: String,
    pub description: String,
}

impl Entity for AmusementPark {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Resource for AmusementPark {
    const TYPE_NAME: &'static str = "AmusementPark";
    const PATH: &'static str = "amusementparks";
    const CLIENT_SUPPLIED_ID: bool = false;

    type CreateParams = NewAmusementPark;

    fn from_params(params: NewAmusementPark) -> Self {
        Self {
            id: 0,
            name: params.name,
            address: params.address,
            description: params.description,
        }
    }
}
