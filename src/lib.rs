//! mathbox: interactive console toolkit for classic numeric exercises
//!
//! Three commands behind a menu loop: sum of cubes, sum of factorials
//! and temperature conversion. Each is a read, validate, compute, print
//! cycle over one blocking console; `application::session` holds the
//! dispatcher that ties them together.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
