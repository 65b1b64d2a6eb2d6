//! Four-vectors, three-vectors and the frame transformations between them

mod four_vector;
pub use four_vector::*;

mod three_vector;
pub use three_vector::*;
