pub mod farming;
