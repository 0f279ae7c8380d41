use cw_storage_plus::{Item, Map};

use crate::Config;

pub const CONFIG: Item<Config> = Item::new("config");

// operation counts recorded by `ExecuteMsg::Count`, keyed by the input as given
pub const RESULTS: Map<&str, u64> = Map::new("results");
