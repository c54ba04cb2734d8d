//! CLI argument parsing for the workflow engine.
//!
//! The CLI is a thin shell over the library: it reads snapshot files, calls
//! the engine, and prints results. No workflow policy lives here.
use clap::{Args, Parser, Subcommand};
use reqflow::{EntityId, RawStatus, RequirementType, ViewerRole, WorkflowStatus};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "reqflow",
    version,
    about = "Requirement lifecycle workflow engine",
    after_help = "Examples:\n  reqflow classify --input requirements.json\n  reqflow resolve --input requirements.json --viewer 42 --json\n  reqflow cta --status Waiting --role receiver --type outsourced --workspace-mapped\n  reqflow transitions --from Review --role sender\n  reqflow audit --input requirements.json --config reqflow.json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Classify(ClassifyArgs),
    Resolve(ResolveArgs),
    Cta(CtaArgs),
    Transitions(TransitionsArgs),
    Audit(AuditArgs),
    Init(InitArgs),
}

/// Classify command inputs.
#[derive(Args, Debug)]
#[command(about = "Assign each requirement to a worklist tab")]
pub struct ClassifyArgs {
    /// JSON file holding an array of requirement snapshots
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
#[command(about = "Resolve the card action state for one viewer")]
pub struct ResolveArgs {
    /// JSON file holding an array of requirement snapshots
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Current user id, compared against `updated_user` on rejections
    #[arg(long, value_name = "ID")]
    pub viewer: Option<EntityId>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// CTA command inputs; the context flags mirror `RequirementContext`.
#[derive(Args, Debug)]
#[command(about = "Build the detail-header call to action as JSON")]
pub struct CtaArgs {
    /// Raw status, e.g. Waiting, In_Progress, draft
    #[arg(long, value_name = "STATUS")]
    pub status: RawStatus,

    /// Viewer role: sender, receiver, or internal
    #[arg(long, value_name = "ROLE")]
    pub role: ViewerRole,

    /// Requirement type: inhouse, outsourced, or client
    #[arg(long = "type", value_name = "TYPE", default_value = "outsourced")]
    pub kind: RequirementType,

    #[arg(long)]
    pub workspace_mapped: bool,

    #[arg(long)]
    pub rejected_by_viewer: bool,

    #[arg(long)]
    pub approval_pending: bool,

    /// Upstream delay flag (status == "delayed")
    #[arg(long)]
    pub delayed: bool,
}

#[derive(Args, Debug)]
#[command(about = "List statuses a role may move a requirement to")]
pub struct TransitionsArgs {
    /// Current workflow status
    #[arg(long, value_name = "STATUS")]
    pub from: WorkflowStatus,

    /// Acting role: sender, receiver, or internal
    #[arg(long, value_name = "ROLE")]
    pub role: ViewerRole,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
#[command(about = "Report upstream inconsistencies in requirement snapshots")]
pub struct AuditArgs {
    /// JSON file holding an array of requirement snapshots
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Config file; defaults to the per-user reqflow/config.json when present
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
#[command(about = "Write a default config file")]
pub struct InitArgs {
    /// Destination; defaults to the per-user reqflow/config.json
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}
