// src/core/mod.rs
pub mod alphabet;
pub mod derive;
pub mod secure_key;
pub mod stream;
pub mod util;

pub use alphabet::*;
pub use derive::*;
pub use secure_key::*;
pub use stream::*;
pub use util::*;
