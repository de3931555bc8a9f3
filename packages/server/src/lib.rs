// Pick A Childcare - API Core
//
// Directory of childcare providers, the agencies that manage them, and the
// waitlist families join for a spot.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod seed;
pub mod server;

pub use config::*;
