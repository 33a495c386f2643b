//! Stacking chains.
//!
//! Sevens, Nines and Jokers do not hit immediately. Placing one opens a
//! chain (or extends the open one); the penalty accumulates until the
//! liable player cannot or will not answer with the same rank, and is then
//! paid in full by the chain's target.
//!
//! ```
//! use maumau::core::{PlayerId, Rank};
//! use maumau::stack::StackingContext;
//!
//! let mut chain = StackingContext::open(Rank::Seven, PlayerId(1), None);
//! chain.extend(PlayerId(2));
//! assert_eq!(chain.count(), 2);
//! assert_eq!(chain.penalty(), 4);
//! ```

mod chain;

pub use chain::StackingContext;
