mod args;
mod provenance;
mod report;

use anyhow::{ensure, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trigon::TrigCfg;

use args::{Action, Cmd};
use report::Units;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let units = if cmd.degrees {
        Units::Degrees
    } else {
        Units::Radians
    };
    let cfg = solver_cfg(cmd.eps_side, cmd.eps_angle)?;

    let (doc, params) = match cmd.action {
        Action::Vector { op } => {
            tracing::info!(?op, ?units, "vector");
            let doc = report::vector(op, units);
            (doc, serde_json::json!({ "vector": format!("{op:?}") }))
        }
        Action::Triangle { case } => {
            tracing::info!(
                ?case,
                ?units,
                eps_side = cfg.eps_side,
                eps_angle = cfg.eps_angle,
                "triangle"
            );
            let doc = report::triangle(case, units, cfg)?;
            (doc, serde_json::json!({ "triangle": format!("{case:?}") }))
        }
    };

    match cmd.out {
        Some(path) => {
            provenance::write_result(&path, &doc)?;
            let sidecar = provenance::write_sidecar(&path, params)?;
            tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "written");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }
    Ok(())
}

fn solver_cfg(eps_side: Option<f64>, eps_angle: Option<f64>) -> Result<TrigCfg> {
    let mut cfg = TrigCfg::default();
    if let Some(eps) = eps_side {
        ensure!(
            eps.is_finite() && eps >= 0.0,
            "--eps-side must be finite and >= 0, got {eps}"
        );
        cfg.eps_side = eps;
    }
    if let Some(eps) = eps_angle {
        ensure!(
            eps.is_finite() && eps >= 0.0,
            "--eps-angle must be finite and >= 0, got {eps}"
        );
        cfg.eps_angle = eps;
    }
    Ok(cfg)
}
