use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub creator: String,
    pub genre: String,
}

/// Create payload; the store assigns the id.
#[derive(Debug, Deserialize)]
pub struct NewGame {
    pub name: String,
    pub creator: String,
    pub genre: String,
}

impl Entity for Game {
    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

impl Resource for Game {
    const TYPE_NAME: &'static str = "Game";
    const PATH: &'static str = "games";
    const CLIENT_SUPPLIED_ID: bool = false;

    type CreateParams = NewGame;

    fn from_params(params: NewGame) -> Self {
        Self {
            id: 0,
            name: params.name,
            creator: params.creator,
            genre: params.genre,
        }
    }
}
