// Timer client: mirrors the server's running time entry and derives the elapsed display clock
// locally between server reads.

pub mod api;
pub mod errors;
pub mod http;
pub mod timer_hook;
pub mod widget;
