//! Contact request submission.

use crate::cli::ContactArgs;
use crate::client::Context;
use crate::contact::{self, ContactDraft, ContactForm};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::t;

const RETRY_COMMAND: &str = "raniclean contact --retry";

fn form_from_args(args: &ContactArgs) -> Result<ContactForm> {
    let required = |value: &Option<String>, flag: &str| {
        value.clone().ok_or_else(|| Error::invalid_arg(format!("--{flag} is required")))
    };

    Ok(ContactForm::builder()
        .name(required(&args.name, "name")?)
        .email(required(&args.email, "email")?)
        .maybe_phone(args.phone.clone())
        .service(required(&args.service, "service")?)
        .message(required(&args.message, "message")?)
        .build())
}

/// Validate and send a contact request, or resend the saved draft.
pub async fn contact(ctx: &Context, args: &ContactArgs) -> Result<()> {
    let drafts = ctx.drafts();

    let (form, locale): (ContactForm, Locale) = if args.retry {
        let Some(draft) = drafts.load()? else {
            return Err(Error::invalid_arg(t!(ctx.locale, "form-no-draft")));
        };
        tracing::debug!(saved_at = %draft.saved_at, "Retrying saved contact request");
        (draft.form, args.locale.map_or(draft.locale, Locale::from))
    } else {
        (form_from_args(args)?, args.locale.map_or(ctx.locale, Locale::from))
    };

    if args.dry_run {
        form.check(locale)?;
        ctx.output.success(&t!(locale, "form-dry-run"));
        return ctx.output.value(&form.template_params(&t!(locale, "form-phone-not-provided")));
    }

    let relay = ctx.relay()?;

    match contact::submit(&relay, &form, locale).await {
        Ok(params) => {
            drafts.clear()?;
            ctx.output.success(&t!(locale, "form-success"));
            ctx.output.value(&params)
        },
        Err(e) if e.is_retryable() => {
            // Keep what the visitor typed so nothing has to be re-entered
            match drafts.save(&ContactDraft::new(form, locale)) {
                Ok(()) => ctx.output.info(&t!(locale, "form-draft-saved", "command" => RETRY_COMMAND)),
                Err(save_error) => {
                    tracing::warn!(error = %save_error, path = %drafts.path().display(), "Could not save contact draft");
                },
            }
            Err(e)
        },
        Err(e) => Err(e),
    }
}
