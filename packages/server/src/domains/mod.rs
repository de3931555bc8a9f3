// Directory domains
pub mod agencies;
pub mod providers;
pub mod waitlist;
