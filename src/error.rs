/*
 * Error Module
 *
 * This module defines the error types surfaced by map generation.
 * Generation errors are fatal to the failing call; the caller never
 * receives a partially classified map.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid map dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("invalid seed count {0}: at least one seed is required")]
    InvalidSeedCount(usize),
}
