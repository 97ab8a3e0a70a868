pub mod envelope;
pub mod exchange;
pub mod price;
pub mod production;

pub use envelope::*;
pub use exchange::*;
pub use price::*;
pub use production::*;
