//! Data layer
//!
//! The in-memory grid plus everything that moves it in and out of
//! delimited text files.

pub mod delimiter;
pub mod grid;
pub mod grid_loader;
pub mod line_parser;
pub mod serializer;
