//! # Domain Services
//!
//! エンティティに属さないビジネスルール

pub mod input_classifier;
