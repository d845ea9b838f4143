use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod case_convention;
pub mod clipboard;
pub mod command;
pub mod counts;
pub mod display;
pub mod engine;
pub mod history;
pub mod replace;
pub mod transform;

pub type Tendril = SmartString<LazyCompact>;
