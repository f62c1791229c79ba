//! Command implementations
//!
//! This module contains the work done for the chapters given on the command line.
//!
//! # Available Commands
//!
//! - [`chapter`] - Walk a BLFS chapter index and print every package page in it

pub mod chapter;
