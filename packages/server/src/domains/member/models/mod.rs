pub mod member;
pub mod role;

pub use member::Member;
pub use role::Role;
