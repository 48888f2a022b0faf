pub mod analysis;
pub mod history;
pub mod news;
pub mod profile;
pub mod quotes;
pub mod search;
pub mod statements;
