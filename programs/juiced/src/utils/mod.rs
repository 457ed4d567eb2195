pub mod consts;
pub mod macros;
pub mod math;
