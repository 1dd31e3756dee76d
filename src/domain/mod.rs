pub mod entities;
pub mod permutation;
pub mod value_objects;
