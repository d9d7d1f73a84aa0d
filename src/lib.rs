#![forbid(unsafe_code)]
//! directree — render a directory's structure as an indented tree diagram.

pub mod cli;
pub mod render;
pub mod sink;
pub mod tree;
