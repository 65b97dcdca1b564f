//! Registration workflow domain

mod workflow;

pub use workflow::RegistrationWorkflow;
