//! CWI, the line protocol spoken by the `connectw` binary

pub mod command;
pub mod protocol;
