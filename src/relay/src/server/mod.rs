mod app;
pub mod error;
pub mod handlers;
mod relay_server;
mod routes;
mod state;
pub mod structs;

pub use app::get_router;
pub use relay_server::RelayServer;
pub use state::RelayState;
