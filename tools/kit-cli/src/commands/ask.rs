//! Kit consultant command.

use anyhow::{Context as _, Result};
use kit_consultant::{ChatSession, GeminiClient};

use super::AskArgs;
use crate::context::Context;

/// Run the ask command.
pub async fn run(args: AskArgs, ctx: &Context) -> Result<()> {
    let question = args.question.join(" ");
    let consultant = &ctx.config.consultant;

    let client = GeminiClient::from_config(consultant)
        .context("The kit consultant is not configured")?;
    let mut session = ChatSession::with_system_instruction(consultant.system_instruction.clone());

    let spinner = ctx.output.spinner("Consulting the kit specialist...");
    let reply = session.send(&client, &question).await.map(|m| m.text.clone());
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&session.messages());
        return Ok(());
    }

    match reply {
        Some(text) => {
            ctx.output.section("Kit Consultant");
            println!("{}", text);
        }
        None => ctx.output.warn("Nothing to ask: the question is blank."),
    }

    Ok(())
}
