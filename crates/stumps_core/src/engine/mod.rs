pub mod innings;
pub mod overs;

pub use innings::{InningsEngine, InningsPlan};
