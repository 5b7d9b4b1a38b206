// src/lib.rs

//! GSEB Past-Paper Scraper Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
