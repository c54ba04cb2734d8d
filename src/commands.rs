//! Command handlers behind the CLI.
//!
//! Each handler loads its inputs, calls the engine, and prints either a
//! tab-separated text view or pretty JSON.
use crate::cli::{AuditArgs, ClassifyArgs, CtaArgs, InitArgs, ResolveArgs, TransitionsArgs};
use anyhow::{anyhow, Context, Result};
use reqflow::config;
use reqflow::{
    allowed_transitions, audit, build_cta, classify, resolve, tab_counts, ActionState, EntityId,
    Requirement, RequirementContext, Tab,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct ClassifiedRow<'a> {
    id: &'a EntityId,
    tab: Tab,
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    requirements: Vec<ClassifiedRow<'a>>,
    counts: BTreeMap<Tab, usize>,
}

#[derive(Serialize)]
struct ResolvedRow<'a> {
    id: &'a EntityId,
    #[serde(flatten)]
    state: ActionState,
}

pub fn run_classify(args: ClassifyArgs) -> Result<()> {
    let reqs = load_requirements(&args.input)?;
    let rows: Vec<ClassifiedRow<'_>> = reqs
        .iter()
        .map(|req| ClassifiedRow {
            id: &req.id,
            tab: classify(req),
        })
        .collect();
    let counts = tab_counts(&reqs);
    if args.json {
        return print_json(&ClassifyOutput {
            requirements: rows,
            counts,
        });
    }
    for row in &rows {
        println!("{}\t{}", row.id, row.tab);
    }
    let summary: Vec<String> = counts
        .iter()
        .map(|(tab, count)| format!("{tab}={count}"))
        .collect();
    println!("counts: {}", summary.join(" "));
    Ok(())
}

pub fn run_resolve(args: ResolveArgs) -> Result<()> {
    let reqs = load_requirements(&args.input)?;
    let viewer = args.viewer.as_ref();
    let rows: Vec<ResolvedRow<'_>> = reqs
        .iter()
        .map(|req| ResolvedRow {
            id: &req.id,
            state: resolve(req, viewer),
        })
        .collect();
    if args.json {
        return print_json(&rows);
    }
    for row in &rows {
        let marker = if row.state.is_pending { "*" } else { "-" };
        match row.state.action_button_label.as_deref() {
            Some(label) => println!(
                "{}\t{marker}\t{}\t[{label}]",
                row.id, row.state.display_status
            ),
            None => println!("{}\t{marker}\t{}", row.id, row.state.display_status),
        }
    }
    Ok(())
}

pub fn run_cta(args: CtaArgs) -> Result<()> {
    let context = RequirementContext {
        workspace_mapped: args.workspace_mapped,
        rejected_by_viewer: args.rejected_by_viewer,
        approval_pending: args.approval_pending,
        flagged_delayed: args.delayed,
    };
    let cta = build_cta(&args.status, args.role, &context, &args.kind);
    print_json(&cta)
}

pub fn run_transitions(args: TransitionsArgs) -> Result<()> {
    let allowed = allowed_transitions(args.from, args.role);
    if args.json {
        return print_json(&allowed);
    }
    if allowed.is_empty() {
        println!("{} is terminal for {}", args.from, args.role);
    }
    for status in allowed {
        println!("{status}");
    }
    Ok(())
}

pub fn run_audit(args: AuditArgs) -> Result<()> {
    let config = config::resolve_config(args.config.as_deref())?;
    let reqs = load_requirements(&args.input)?;
    let report = audit(&reqs);
    if args.json {
        print_json(&report)?;
    } else {
        println!(
            "checked {} requirements, {} findings",
            report.checked,
            report.findings.len()
        );
        for finding in &report.findings {
            println!(
                "{}\t{}\t{}",
                finding.requirement_id, finding.kind, finding.detail
            );
        }
    }
    let failing = report.failing_kinds(&config.fail_on);
    if failing.is_empty() {
        return Ok(());
    }
    let names: Vec<&str> = failing.iter().map(|kind| kind.as_str()).collect();
    Err(anyhow!("audit failed on: {}", names.join(", ")))
}

pub fn run_init(args: InitArgs) -> Result<()> {
    let path = match args.config {
        Some(path) => path,
        None => config::default_config_path()
            .ok_or_else(|| anyhow!("no per-user config directory; pass --config"))?,
    };
    if path.is_file() && !args.force {
        return Err(anyhow!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::write_config(&path, &config::default_config())?;
    println!("wrote {}", path.display());
    Ok(())
}

fn load_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let reqs: Vec<Requirement> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse requirements JSON {}", path.display()))?;
    tracing::info!(path = %path.display(), count = reqs.len(), "loaded requirements");
    Ok(reqs)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
