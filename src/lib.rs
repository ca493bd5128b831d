mod error;
pub use error::{Error, Result};

pub mod cli;
pub mod config;
pub use config::{Overlay, PushConfig};

pub mod google;
pub mod message;
pub mod project;

mod push;
pub use push::run;
