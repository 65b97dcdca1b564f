//! CLI module for the Academeet accounts service
//!
//! Provides subcommands for driving the registration workflow from a
//! terminal:
//! - `register`: run a full registration attempt
//! - `check-username`: probe username availability in the directory

pub mod register;
pub mod username;

use clap::{Parser, Subcommand};

/// Academeet accounts - registration workflow for the onboarding flow
#[derive(Parser)]
#[command(name = "academeet-accounts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit a registration with the given form values
    Register(register::RegisterArgs),

    /// Check whether a username is still available
    CheckUsername(username::CheckUsernameArgs),
}
