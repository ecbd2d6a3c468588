pub mod app;
pub mod backup;
pub mod calculator;
pub mod clock;
pub mod log;
pub mod session;
pub mod state;
pub mod storage;
pub mod store;
pub mod suggestions;
pub mod sync;
