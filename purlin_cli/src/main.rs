//! # Purlin CLI Application
//!
//! Runs the purlin design engine on a project file and prints a plain-text
//! summary, optionally followed by the calculation trace and JSON output.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to follow each
//! stage of the calculation.

mod cli;

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands, OutputArgs};
use purlin_core::project::MaterialSpec;
use purlin_core::{DesignError, DesignResult, PurlinProject, SectionProperties};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            match e.downcast_ref::<DesignError>() {
                Some(design_error) => print_design_error(design_error),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::from(2)
        }
    }
}

/// Returns whether the member passes.
fn run(cli: Cli) -> Result<bool> {
    let (project, output) = match cli.command {
        Commands::Check(args) => (load_project(&args.project)?, args.output),
        Commands::Demo(output) => (PurlinProject::demo(), output),
    };

    log::info!("checking project '{}'", project.meta.project_name);
    let result = project.run()?;
    let section = SectionProperties::from_json(&project.input.section)?;

    print_summary(&project, &section, &result);
    if output.steps {
        print_steps(&result);
    }
    print_json(&result, &output)?;

    Ok(result.passes())
}

fn load_project(path: &std::path::Path) -> Result<PurlinProject> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read project file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse project file {}", path.display()))
}

fn print_summary(project: &PurlinProject, section: &SectionProperties, result: &DesignResult) {
    let geometry = &project.input.geometry;
    let checks = &result.checks;

    println!("═══════════════════════════════════════");
    println!("  PURLIN DESIGN CHECK (LRFD)");
    println!("═══════════════════════════════════════");
    println!();
    println!("Project:  {}", project.meta.project_name);
    if !project.meta.engineer.is_empty() {
        println!("Engineer: {}", project.meta.engineer);
    }
    println!();
    println!("Input:");
    println!("  Span:     {:.2} m", geometry.span);
    println!("  Spacing:  {:.2} m", geometry.spacing);
    println!("  Slope:    {:.1}°", geometry.slope);
    println!("  Section:  {}", section.name);
    println!();
    if let MaterialSpec::Grade { grade } = &project.input.material {
        let props = grade.properties();
        println!("Material: {} ({})", grade, grade.standard());
        println!("  Fy = {:.0} MPa, Fu = {:.0} MPa", props.fy.0, props.fu.0);
        println!("  Min. elongation at t = {:.1} mm: {:.0}%", section.t, grade.elongation_percent(section.t));
        println!();
    }
    println!("Line Loads:");
    println!("  w_DL = {:.2} kg/m (incl. self-weight {:.2})", result.loads.dl_line, result.loads.self_weight);
    println!("  w_LL = {:.2} kg/m", result.loads.ll_line);
    println!("  w_WL = {:.2} kg/m", result.loads.wl_perp);
    println!();
    println!("Combinations:");
    for value in &result.combinations.values {
        println!("  w_{} = {:.2} kg/m  ({})", value.symbol, value.value, value.name);
    }
    println!("  Governing: {} (w_u = {:.2} kg/m)", result.combinations.governing, result.combinations.design);
    println!();
    println!("Demand:");
    println!("  M_u = {:.2} kg-m", result.forces.mu_kgm);
    println!("  V_u = {:.2} kg", result.forces.vu_kg);
    println!();
    println!("Capacity Checks:");
    println!("  Flexure:    {:.3} ({:.2}/{:.2} kg-m) {}",
        checks.ratios.moment,
        checks.demand.mu,
        checks.capacity.phi_mn,
        status_icon(checks.status.moment)
    );
    println!("  Shear:      {:.3} ({:.2}/{:.2} kg) {}",
        checks.ratios.shear,
        checks.demand.vu,
        checks.capacity.phi_vn,
        status_icon(checks.status.shear)
    );
    println!("  Deflection: {:.3} ({:.2}/{:.2} cm) {}",
        checks.ratios.deflection,
        checks.demand.delta,
        checks.capacity.delta_limit,
        status_icon(checks.status.deflection)
    );
    println!("  h/t:        {:.2}", checks.ratios.h_t);
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {} (governs: {}, ratio {:.3})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition(),
        result.governing_ratio()
    );
    println!("═══════════════════════════════════════");
}

fn print_steps(result: &DesignResult) {
    println!();
    println!("Calculation Steps:");
    for (i, step) in result.steps.iter().enumerate() {
        println!();
        println!("{:>2}. {}", i + 1, step.title);
        println!("    {}", step.formula);
        println!("    {}", step.substitution);
        match step.status {
            Some(status) => println!("    = {} [{}]", step.result, status),
            None => println!("    = {}", step.result),
        }
    }
}

fn print_json(result: &DesignResult, output: &OutputArgs) -> Result<()> {
    if output.json {
        println!();
        println!("JSON Output:");
        println!("{}", serde_json::to_string_pretty(result).context("failed to serialize result")?);
    }
    Ok(())
}

fn print_design_error(e: &DesignError) {
    eprintln!("Error [{}] in '{}': {}", e.error_code(), e.field(), e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
