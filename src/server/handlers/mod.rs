pub mod cities;
pub mod commands;
pub mod payments;
pub mod profiles;
pub mod quotes;
pub mod rides;
