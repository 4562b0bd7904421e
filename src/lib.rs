pub mod config;
pub mod despike;
pub mod recorder;
pub mod replay;
pub mod session;
pub mod skeleton;
