//! Core wallet functionality
//!
//! This module contains the core generator functionality including
//! wallet generation, cryptography, output storage and bulk runs.

pub mod wallet;
pub mod crypto;
pub mod storage;
pub mod bulk;
