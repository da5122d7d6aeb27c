use anyhow::Result;

use super::{CommandResult, CommandSummary, ConvertSummary};
use crate::cli::args::ConvertCommand;
use crate::config::{ConvertConfig, load_config};
use crate::core::run_conversion;

pub fn convert(cmd: ConvertCommand) -> Result<CommandResult> {
    let args = cmd.args;

    if !args.root.is_dir() {
        return Ok(CommandResult {
            summary: CommandSummary::Convert(ConvertSummary {
                run: None,
                missing_root: Some(args.root),
            }),
        });
    }

    let loaded = load_config(&args.root)?;
    let config = apply_overrides(loaded.config, &args);
    config.validate()?;

    let summary = run_conversion(&args.root, &config, args.common.verbose);
    Ok(CommandResult {
        summary: CommandSummary::Convert(ConvertSummary {
            run: Some(summary),
            missing_root: None,
        }),
    })
}

/// CLI flags win over config-file values, which win over defaults.
fn apply_overrides(
    mut config: ConvertConfig,
    args: &crate::cli::args::ConvertArgs,
) -> ConvertConfig {
    if let Some(out_dir) = &args.common.out_dir {
        config.output_dir = out_dir.to_string_lossy().to_string();
    }
    if let Some(suffix) = &args.suffix {
        config.translations_suffix = suffix.clone();
    }
    if !args.scan_roots.is_empty() {
        config.scan_roots = args.scan_roots.clone();
    }
    if args.no_index {
        config.index_mode = false;
    }
    if args.alongside {
        config.alongside_source = true;
    }
    if args.rewrite_index {
        config.rewrite_index_imports = true;
    }
    if args.delete_source {
        config.delete_source = true;
    }
    config
}
