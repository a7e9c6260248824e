//! # pasala-service
//!
//! Application layer containing the match, roster, result, identity, claim and
//! metrics use cases, plus their request/response DTOs.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
