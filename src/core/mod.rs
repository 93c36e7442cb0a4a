pub mod git;
pub mod hosting;
pub mod identity;
pub mod sweep;
