// HTTP routes
pub mod agencies;
pub mod health;
pub mod providers;
pub mod root;
pub mod waitlist;

pub use agencies::*;
pub use health::*;
pub use providers::*;
pub use root::*;
pub use waitlist::*;
