pub mod commands;
pub mod errors;
pub mod events;
pub mod fine;
pub mod item;
pub mod reservation;
pub mod user;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use item::{Item, ItemState};
pub use reservation::{Request, ReservationQueue};
pub use user::User;
pub use value_objects::*;
