// tests/core/mod.rs

#[cfg(test)]
mod alphabet;
#[cfg(test)]
mod derive;
#[cfg(test)]
mod secure_key;
#[cfg(test)]
mod stream;
#[cfg(test)]
mod util;
