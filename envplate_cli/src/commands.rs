pub mod envplate;
pub mod template;
