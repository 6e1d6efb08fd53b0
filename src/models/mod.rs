// Records persisted in the store and the request bodies that shape them

pub mod member;
pub mod patch;
pub mod workout_session;

pub use member::*;
pub use workout_session::*;
