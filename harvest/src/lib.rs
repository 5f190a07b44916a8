extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate serde_derive;
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
extern crate reqwest;
extern crate uuid;
#[macro_use]
extern crate log;
#[cfg(test)] #[macro_use] extern crate matches;
#[cfg(test)] extern crate tempfile;

pub mod config;
pub mod sink;
pub mod pacing;
pub mod swapcard;
pub mod harvest;
