use crate::challenge::TerminalChallenge;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::EnhanceArgs;
use crate::commands::shared::request::build_enhance_request;
use crate::context::AppContext;
use crate::in_flight;
use crate::output::output;
use crate::pipeline::run_enhance;
use crate::progress::Spinner;

/// Handle `dhll enhance`.
pub async fn handle(args: &EnhanceArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = args.text.trim();
    if text.is_empty() {
        anyhow::bail!("nothing to enhance: text is empty");
    }

    let mut gate = ctx.gate();
    if let Some(code) = args.rating {
        let mut challenge = TerminalChallenge::new(&args.answers);
        let outcome = gate.request_rating_change(code, &mut challenge)?;
        if !flags.quiet {
            eprintln!("{outcome}");
        }
    }

    let request = build_enhance_request(
        text,
        &args.options,
        &ctx.config.defaults,
        Some(gate.active()),
    );
    let client = ctx.client()?;
    let _lock = in_flight::acquire(&ctx.storage_dir)?;
    let mut ledger = ctx.ledger();

    let spinner = Spinner::start("Enhancing...");
    let outcome = match run_enhance(&client, &mut ledger, &request).await {
        Ok(outcome) => {
            spinner.finish();
            outcome
        }
        Err(error) => {
            spinner.fail("Enhance failed");
            return Err(error);
        }
    };

    output(&outcome, flags.format)
}
