pub mod error;
pub mod models;
pub mod validation;
pub mod tally_logic;

pub use error::{Error, ErrorCode};
pub use models::*;
pub use validation::*;
pub use tally_logic::{Categories, Category, Poll, Tally, VotingError, DEFAULT_CATEGORIES};
