//! CSI protocol handling.
//!
//! This module implements parsing and serialization for the CSI (Curling
//! Shot Interface) protocol: the line command parser for the main loop,
//! sheet notation for positions, and the JSON request/response bodies used
//! by the front-end.

pub mod notation;
pub mod parser;
pub mod wire;

pub use notation::{encode_sheet, parse_sheet, NotationError};
pub use parser::{parse_command, Command};
pub use wire::{format_response, parse_request, ShotRequest, ShotResponse, WireError};
