//! Foodie kiosk — terminal host for the order/reservation form
//!
//! Reads a form (interactively, or from a JSON file passed as the first
//! argument), feeds it to the flow controller and applies the resulting
//! render instructions to the terminal. The deep-link is printed at hand-off
//! time rather than opened, since a kiosk terminal has no browser.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::debug;

use foodie_flow::{
    FlowConfig, FlowController, FlowError, FormInput, RenderOp, SubmitOutcome,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = FlowConfig::from_env();
    let (controller, mut ops) = FlowController::new(config);

    let renderer = tokio::spawn(async move {
        while let Some(op) = ops.recv().await {
            apply(op);
        }
    });

    let input = match std::env::args().nth(1) {
        Some(path) => {
            let payload = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read form file: {path}"))?;
            serde_json::from_str(&payload)
                .map_err(|e| FlowError::InvalidForm(e.to_string()))
                .with_context(|| format!("Failed to decode form file: {path}"))?
        }
        None => prompt_form()?,
    };

    match controller.submit(&input) {
        SubmitOutcome::Rejected => {
            println!("\nSubmission not sent. Please fix the fields above and try again.");
        }
        SubmitOutcome::Accepted(pending) => pending.settled().await,
    }

    drop(controller);
    renderer.await?;
    Ok(())
}

fn init_logger() {
    let level = std::env::var("FOODIE_LOG").unwrap_or_else(|_| "info".into());

    tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_target(false)
        .init();
}

/// Apply one render instruction to the terminal.
fn apply(op: RenderOp) {
    match op {
        RenderOp::ShowFieldError { field, message } => {
            println!("  ! {}: {}", field.label(), message);
        }
        RenderOp::ClearFieldError { field } => {
            debug!(field = field.name(), "field error cleared");
        }
        RenderOp::ClearAllErrors => {
            debug!("all field errors cleared");
        }
        RenderOp::ShowBanner { text } => {
            println!("\n>> {text}");
        }
        RenderOp::RemoveBanner => {
            debug!("confirmation banner removed");
        }
        RenderOp::OpenLink { url, mode } => {
            println!("\nOpen ({mode:?}): {url}");
        }
        RenderOp::ResetForm { defaults } => {
            println!(
                "Form reset: date {}, time {}, order form restored",
                defaults.date, defaults.time
            );
        }
    }
}

/// Interactive form intake, one prompt per field.
fn prompt_form() -> anyhow::Result<FormInput> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut ask = |prompt: &str| -> anyhow::Result<String> {
        print!("{prompt}: ");
        io::stdout().flush()?;
        Ok(lines.next().transpose()?.unwrap_or_default())
    };

    let is_reservation = matches!(
        ask("Table reservation? (y/n)")?.trim(),
        "y" | "Y" | "yes" | "Yes"
    );

    let name = ask("Name")?;
    let phone = ask("Phone")?;

    let (date, time, guests, details) = if is_reservation {
        (
            ask("Date (YYYY-MM-DD)")?,
            ask("Time (HH:MM)")?,
            ask("Guests")?,
            ask("Notes")?,
        )
    } else {
        (String::new(), String::new(), String::new(), ask("Order details")?)
    };

    Ok(FormInput {
        name,
        phone,
        details,
        date,
        time,
        guests,
        is_reservation,
    })
}
