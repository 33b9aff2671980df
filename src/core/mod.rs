// Core modules implementing merge, geometry conversions, kinds, and error modeling.
pub mod error;
pub mod geometry;
pub mod kind;
pub mod merge;
