//! Kinship Table Audit
//!
//! Loads the kinship tables, prints the completeness report, and optionally
//! resolves one chain:
//!
//!   kinship_audit [--gender male|female] [step ...]
//!
//! Exits non-zero when the tables are incomplete.

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use kinship_calc::kinship::describe_chain;
use kinship_calc::tables::integrity;
use kinship_calc::{EngineConfig, Gender, KinshipEngine, KinshipTables, RelationStep};

struct Args {
    gender: Gender,
    chain: Vec<RelationStep>,
}

fn parse_args() -> Result<Args> {
    let mut gender = Gender::Male;
    let mut chain = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--gender" | "-g" => {
                let value = args.next().context("--gender needs a value")?;
                gender = value.parse::<Gender>().context("invalid --gender")?;
            }
            "--help" | "-h" => {
                println!("usage: kinship_audit [--gender male|female] [step ...]");
                std::process::exit(0);
            }
            step => chain.push(step.parse::<RelationStep>().with_context(|| format!("invalid step '{step}'"))?),
        }
    }
    Ok(Args { gender, chain })
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let args = parse_args()?;
    let config = EngineConfig::from_env();

    let tables = match &config.data_dir {
        Some(dir) => KinshipTables::load_dir(dir).with_context(|| format!("loading tables from {}", dir.display()))?,
        None => KinshipTables::embedded().context("loading embedded tables")?,
    };

    let report = integrity::check(&tables);
    println!("{}", "═".repeat(60));
    println!("Kinship tables: {} roles, {} chains", tables.roles().len(), tables.resolution().len());
    for dialect in tables.dialects() {
        let meta = dialect.meta();
        println!(
            "  {:<10} {} ({}), {} terms",
            meta.name,
            meta.native_name,
            meta.romanization_system,
            dialect.len()
        );
    }
    println!("Integrity: {}", report);
    for problem in report.problems() {
        println!("  - {}", problem);
    }
    println!("{}", "═".repeat(60));

    if !report.is_clean() && config.strict_tables {
        bail!("{} table problems found", report.problem_count());
    }

    if args.chain.is_empty() {
        return Ok(());
    }

    let engine = KinshipEngine::with_config(tables, config);
    info!("Resolving {} for a {} subject", describe_chain(&args.chain), args.gender);

    let output = serde_json::json!({
        "chain": args.chain,
        "gender": args.gender,
        "result": engine.resolve(&args.chain, args.gender),
        "reverse": engine.resolve_reverse(&args.chain, args.gender),
        "next_steps": engine.valid_next_steps(&args.chain, args.gender),
        "unresolved": engine.diagnose(&args.chain, args.gender).err().map(|e| e.to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&output).context("serializing result")?);
    Ok(())
}
