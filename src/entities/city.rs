use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub state: String,
}
