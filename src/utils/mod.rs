pub mod constants;
pub mod coords;
pub mod time;
