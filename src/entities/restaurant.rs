use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::store::Entity;

/// The one resource type whose callers control ids: create requires an
/// explicit id, and update persists whatever id the payload carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub address: String,
    pub specialty: String,
}

#[derive(Debug, Deserialize)]
pub struct NewRestaurant {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub specialty: String,
}

impl Entity for Restaurant {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Resource for Restaurant {
    const TYPE_NAME: &'static str = "Restaurant";
    const PATH: &'static str = "restaurants";
    const CLIENT_SUPPLIED_ID: bool = true;

    type CreateParams = NewRestaurant;

    fn from_params(params: NewRestaurant) -> Self {
        Self {
            id: params.id,
            name: params.name,
            address: params.address,
            specialty: params.specialty,
        }
    }
}
