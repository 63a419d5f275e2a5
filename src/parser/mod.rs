pub mod dom;
pub mod extract;
pub mod layout;
pub mod listing;
pub mod overrides;
