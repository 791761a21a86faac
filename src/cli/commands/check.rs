use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::core::CheckContext;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let findings = ctx.findings();

    Ok(finish(
        CommandSummary::Check,
        findings.issues.clone(),
        findings.warnings.clone(),
        ctx.files.len(),
    ))
}
