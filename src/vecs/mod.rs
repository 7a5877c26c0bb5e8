pub mod any_vec;
pub mod dynamic_array;
