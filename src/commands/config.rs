//! `graphbench config` command - print the effective configuration

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use graphbench_core::error::Result;

/// Execute the config command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = ctx.load_config()?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok::<(), graphbench_core::error::GraphBenchError>(())
        },
        human => {
            print!("{}", config.to_toml()?);
        },
        records => {
            let join = |items: Vec<String>| items.join(",");
            println!(
                "H graphbench=1 records=1 mode=config sizes={} densities={} runs={} output={} representations={}",
                join(config.sizes.iter().map(|s| s.to_string()).collect()),
                join(config.densities.iter().map(|d| d.to_string()).collect()),
                config.runs,
                config.output.display(),
                join(config.representations.iter().map(|r| r.to_string()).collect())
            );
        }
    )?;

    Ok(())
}
