//! Two small command-line tools sharing one layered crate:
//!
//! * `permute` prints every distinct permutation of each line of a file.
//! * `todos` sends GET, POST or DELETE to a todos REST endpoint and
//!   pretty-prints the JSON it answers with.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
