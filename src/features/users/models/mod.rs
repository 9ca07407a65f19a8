mod user;

pub use user::{Tier, User};
