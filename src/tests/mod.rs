//! cell-survey lib test modules

mod properties;
