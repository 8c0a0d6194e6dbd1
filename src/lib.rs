pub mod boot;
pub mod clock;
pub mod command;
pub mod content;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod neofetch;
pub mod persist;
pub mod portfolio;
pub mod session;
pub mod system;
pub mod terminal;
pub mod theme;

pub use system::System;
pub use terminal::Terminal;
