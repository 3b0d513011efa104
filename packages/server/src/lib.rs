// Chapterhouse - API Core
//
// Backend service for a chapter-based workshop community: chapters run free
// coding workshops hosted by sponsors, members attend as students or coaches,
// and staff moderate a community job board.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
