//! Domain types.

pub mod keypair;
pub mod public_key;

pub use keypair::Keypair;
pub use public_key::PublicKeyHandle;
