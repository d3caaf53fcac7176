mod errors;
mod fines;
mod lending_service;
mod queries;
mod registration;

pub use errors::{Entity, LendingError, Result};
pub use fines::calculate_fines;
pub use lending_service::{
    ServiceDependencies, check_out_item, fulfill_requests, renew_item, request_item, return_item,
};
pub use queries::{available_items, held_items, requests_for_user};
pub use registration::register_user;
