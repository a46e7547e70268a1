pub mod create;
pub mod dto;
pub mod random;
pub mod validate;
