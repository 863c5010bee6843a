pub mod avatar;
pub mod journal;
pub mod personas;
