//! Diagnostics codes and outcome envelopes shared by every command.

pub(crate) mod diagnostics;
pub(crate) mod outcome;
