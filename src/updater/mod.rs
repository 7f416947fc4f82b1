mod service;

pub use service::{run, Action, Outcome};
