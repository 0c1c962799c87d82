// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod interconnect;
pub mod kubernetes;
pub mod output;

#[cfg(test)]
mod test_utils;

pub use interconnect::{
    find_interconnect_config_map, get_interconnect_config_map, is_not_found, ConfigMapGetter,
};
