//! Slug command - show identifier normalization

use crate::output::{print_json, print_text};
use anyhow::Result;
use contentlab_core::ident::{normalize_id, normalize_title_id, variable_name};
use serde::Serialize;

#[derive(Serialize)]
struct SlugOutput {
    id: String,
    variable: String,
}

pub fn run(text: &str, from_title: bool, json: bool) -> Result<()> {
    let id = if from_title {
        normalize_title_id(text)
    } else {
        normalize_id(text)
    };
    let variable = variable_name(&id);

    if json {
        let output = SlugOutput { id, variable };
        print_json(&serde_json::to_string_pretty(&output)?)?;
    } else {
        print_text(&format!("id:       {}", id))?;
        print_text(&format!("variable: {}", variable))?;
    }

    Ok(())
}
