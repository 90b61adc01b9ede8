pub mod errors;
pub mod gate;

pub use errors::AuthError;
pub use gate::AuthGate;
pub use gate::TokenPair;
