pub mod errors;
pub mod logging;
pub mod purge;
pub mod schema_patch;
pub mod seeding;
pub mod websocket_smoke;
