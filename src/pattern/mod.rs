mod algebra;

pub use algebra::{compose, decompose, host_path, is_parametric};
