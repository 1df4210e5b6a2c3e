//! ETF module - single-source and aggregate holdings views.

mod etf_service;
mod etf_traits;

pub use etf_service::{EtfService, EtfServiceConfig};
pub use etf_traits::EtfServiceTrait;
