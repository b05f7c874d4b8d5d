//! Command-line argument definitions using clap
//!
//! This module defines the CLI structure with clap's derive API, using the
//! parameter wrapper pattern: each command owns a clap-specific argument
//! struct that converts into the framework-free core parameter type via
//! `From`. CLI concerns (help text, flag parsing) stay here; business logic
//! validation stays in the core.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use waypoint_core::params::{DeleteRoadmap, Id, ListRoadmaps, UpdateRoadmap};

/// Main command-line interface for the Waypoint roadmap tool
///
/// Waypoint turns raw AI model responses into structured learning roadmaps.
/// It repairs near-JSON output, normalizes it into a canonical step graph,
/// and stores the result locally. It supports both direct CLI operations and
/// an MCP (Model Context Protocol) server mode for integration with AI
/// assistants.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// User identity that owns the roadmaps. Defaults to $USER
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a roadmap from a raw model response
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List your roadmaps
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show a roadmap with all its steps
    Show(ShowArgs),
    /// Edit a roadmap's title or description
    Edit(EditArgs),
    /// Duplicate a roadmap
    #[command(alias = "dup")]
    Duplicate(DuplicateArgs),
    /// Permanently delete a roadmap
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// Start the MCP server
    Serve,
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// Each wrapper defines CLI-specific parsing with clap derives and converts
// into the matching core parameter type. The From impls make the boundary
// between CLI and core explicit and verifiable at compile time.

/// Generate a roadmap from a raw model response
///
/// Reads the response text from FILE, or from stdin when no file is given.
/// The text may be bare JSON, JSON inside a markdown code fence, or JSON
/// surrounded by prose; anything without an extractable JSON document is
/// rejected.
#[derive(ClapArgs)]
pub struct GenerateArgs {
    /// File containing the raw model response (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Title to use when the response carries none (a title in the
    /// response always wins)
    #[arg(long)]
    pub title_hint: Option<String>,
}

/// List your roadmaps
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only list roadmaps with this exact category
    #[arg(long)]
    pub category: Option<String>,
    /// Only list roadmaps with this exact difficulty
    #[arg(long)]
    pub difficulty: Option<String>,
}

impl From<ListArgs> for ListRoadmaps {
    fn from(val: ListArgs) -> Self {
        ListRoadmaps {
            category: val.category,
            difficulty: val.difficulty,
        }
    }
}

/// Show details of a specific roadmap
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// ID of the roadmap to display
    pub id: u64,
}

impl From<ShowArgs> for Id {
    fn from(val: ShowArgs) -> Self {
        Id { id: val.id }
    }
}

/// Edit a roadmap's metadata
///
/// Only the provided flags change; omitted fields keep their current values.
#[derive(ClapArgs)]
pub struct EditArgs {
    /// ID of the roadmap to edit
    pub id: u64,
    /// New title for the roadmap
    #[arg(short, long)]
    pub title: Option<String>,
    /// New description for the roadmap
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<EditArgs> for UpdateRoadmap {
    fn from(val: EditArgs) -> Self {
        UpdateRoadmap {
            id: val.id,
            title: val.title,
            description: val.description,
        }
    }
}

/// Duplicate a roadmap
#[derive(ClapArgs)]
pub struct DuplicateArgs {
    /// ID of the roadmap to duplicate
    pub id: u64,
}

impl From<DuplicateArgs> for Id {
    fn from(val: DuplicateArgs) -> Self {
        Id { id: val.id }
    }
}

/// Permanently delete a roadmap
#[derive(ClapArgs)]
pub struct DeleteArgs {
    /// ID of the roadmap to delete
    pub id: u64,
    /// Confirm the permanent deletion
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteRoadmap {
    fn from(val: DeleteArgs) -> Self {
        DeleteRoadmap {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}
