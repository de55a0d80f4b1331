pub mod bet;
pub mod chips;
pub mod simulate;
