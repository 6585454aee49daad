pub mod listing;
pub mod object;
