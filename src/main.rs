//! # paperform CLI
//!
//! Usage:
//!   paperform form.json -o form.pdf
//!   echo '{ ... }' | paperform -o form.pdf
//!   paperform form.json --geometry letter.json
//!   paperform form.json --data-uri
//!   paperform --example > form.json
//!
//! Without `-o` the PDF is saved next to the working directory under its
//! sanitized title.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use paperform::{generate, FormConfig, PageGeometry, RenderOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_form_json());
        return;
    }

    if let Err(e) = run(&args) {
        eprintln!("✗ {}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).map_err(|e| format!("Failed to read {}: {}", args[1], e))?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let mut options = RenderOptions::default();
    if let Some(path) = flag_value(args, "--geometry") {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read geometry {}: {}", path, e))?;
        options.geometry = PageGeometry::from_json(&json)?;
    }

    let config = FormConfig::from_json(&input)?;
    let rendered = generate(&config, &options)?;
    for warning in &rendered.warnings {
        eprintln!("! {}", warning);
    }

    if args.iter().any(|a| a == "--data-uri") {
        println!("{}", paperform::output::to_data_uri(&rendered.bytes));
        return Ok(());
    }

    let output_path = flag_value(args, "-o")
        .map(str::to_string)
        .unwrap_or_else(|| rendered.file_name.clone());
    fs::write(&output_path, &rendered.bytes)?;
    eprintln!(
        "✓ Written {} bytes to {}",
        rendered.bytes.len(),
        output_path
    );
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn example_form_json() -> &'static str {
    r##"{
  "formId": "vol-2026-spring",
  "title": "Community Garden Volunteer Sign-up",
  "description": "Return this sheet at the front desk or scan and upload it.",
  "fields": [
    { "id": "name", "label": "Full Name", "type": "text", "required": true },
    {
      "id": "contact",
      "label": "Preferred Contact Method",
      "type": "radio",
      "options": ["Email", "Phone", "Text Message"]
    },
    { "id": "email", "label": "Email Address", "type": "email" },
    { "id": "phone", "label": "Phone Number", "type": "phone" },
    { "id": "birthday", "label": "Date of Birth", "type": "date" },
    {
      "id": "days",
      "label": "Which days are you available?",
      "type": "checkbox",
      "options": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    },
    { "id": "notes", "label": "Anything else we should know?", "type": "textarea" },
    { "id": "age", "label": "Age", "type": "number" },
    { "id": "returning", "label": "Have you volunteered with us before?", "type": "boolean" },
    {
      "id": "shirt",
      "label": "T-Shirt Size",
      "type": "select",
      "options": ["S", "M", "L", "XL"]
    }
  ]
}
"##
}
