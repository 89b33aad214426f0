//! Generate the form builder page for a form definition, fill it in and submit it.
//!
//! Run with: cargo run -p formgen-html --example generate_form -- [definition.json] [id=value ...]
//!
//! Without a definition file the bundled registration form is used.

use std::io;

use anyhow::Context;
use formgen::{FormController, SubmitOutcome, TracingSink};
use formgen_html::{HtmlOptions, page_html};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const REGISTRATION: &str = include_str!("registration.json");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formgen=info,formgen_html=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let definition = match args.next_if(|a| !a.contains('=')) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read form definition {path}"))?,
        None => REGISTRATION.to_string(),
    };

    let mut form = FormController::new(TracingSink::new());
    if let Err(err) = form.load(definition) {
        eprintln!("{err}");
    }

    let mut filled = false;
    for arg in args {
        let (id, value) = arg
            .split_once('=')
            .with_context(|| format!("Expected id=value, got {arg}"))?;
        form.input_change(id, value);
        filled = true;
    }

    if filled {
        match form.submit()? {
            SubmitOutcome::Blocked { missing } => {
                let missing: Vec<_> = missing.iter().map(|id| id.as_str()).collect();
                eprintln!("Please fill out: {}", missing.join(", "));
            }
            SubmitOutcome::Submitted(_) | SubmitOutcome::NoForm => {}
        }
    }

    let html = page_html(form.state(), &HtmlOptions::new().with_title("Form Generator"));
    std::fs::write("form.html", &html).context("Failed to write form.html")?;

    println!("Generated form.html");
    Ok(())
}
