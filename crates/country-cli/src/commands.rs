//! Command implementations. Each returns the text to print on stdout.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use country_catalog::{Catalog, MessageTable};
use country_field::{
    CountrySelectField, FieldConfig, JsonContextRenderer, max_encoded_len, normalize,
    serialize_value,
};
use country_model::SelectionMode;
use tracing::{info, info_span};

use crate::cli::{FieldArgs, NormalizeArgs, OptionsArgs, OptionsFormatArg, RenderContextArgs};

/// Handle used when a command only needs the selection mode.
const DEFAULT_HANDLE: &str = "country";

/// The built-in catalog, or a translated one when a message table is given.
pub fn load_catalog(messages: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    let Some(path) = messages else {
        return Ok(Cow::Borrowed(Catalog::builtin()));
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("read message table {}", path.display()))?;
    let table = MessageTable::from_json_str(&content)
        .with_context(|| format!("parse message table {}", path.display()))?;
    info!(messages = table.len(), path = %path.display(), "loaded message table");
    Ok(Cow::Owned(Catalog::with_translator(&table)))
}

/// Resolve the field definition from `--field` or the inline flags.
pub fn resolve_field(handle: &str, args: &FieldArgs) -> Result<FieldConfig> {
    match &args.field {
        Some(path) => FieldConfig::load(path)
            .with_context(|| format!("load field definition {}", path.display())),
        None => {
            FieldConfig::new(handle, args.mode.is_multi()).context("invalid field definition")
        }
    }
}

pub fn run_options(args: &OptionsArgs, catalog: &Catalog) -> Result<String> {
    let _span = info_span!("options").entered();
    info!(options = catalog.len(), "listing catalog");
    match args.format {
        OptionsFormatArg::Json => {
            serde_json::to_string_pretty(catalog.options()).context("serialize catalog")
        }
        OptionsFormatArg::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Code", "Country"]);
            apply_table_style(&mut table);
            for option in catalog {
                table.add_row(vec![option.code.as_str(), option.label.as_str()]);
            }
            Ok(table.to_string())
        }
    }
}

pub fn run_normalize(args: &NormalizeArgs, catalog: &Catalog) -> Result<String> {
    let config = resolve_field(DEFAULT_HANDLE, &args.field)?;
    let mode = config.mode();
    let _span = info_span!("normalize", %mode).entered();

    let value = normalize(args.value.as_str(), catalog, mode);
    info!(selected = value.len(), "normalized value");

    let json = if args.stored {
        serialize_value(&value)
    } else if args.full {
        serde_json::to_value(&value).context("serialize normalized value")?
    } else {
        serde_json::to_value(&value.selection).context("serialize selection")?
    };
    serde_json::to_string_pretty(&json).context("format output")
}

pub fn run_column_type(args: &FieldArgs, catalog: &Catalog) -> Result<String> {
    let config = resolve_field(DEFAULT_HANDLE, args)?;
    let field = CountrySelectField::with_catalog(config, catalog);
    let column = field.content_column_type();
    let _span = info_span!("column_type", mode = %field.mode()).entered();
    info!(%column, "resolved column type");

    let mut lines = vec![
        format!("mode: {}", field.mode()),
        format!("column: {column}"),
    ];
    if field.mode() == SelectionMode::Multi {
        lines.push(format!("max encoded length: {}", max_encoded_len(catalog)));
    }
    Ok(lines.join("\n"))
}

pub fn run_render_context(args: &RenderContextArgs, catalog: &Catalog) -> Result<String> {
    let config = resolve_field(&args.handle, &args.field)?;
    let field = CountrySelectField::with_catalog(config, catalog);
    let _span = info_span!("render_context", handle = %field.handle()).entered();
    field
        .input_html(
            args.value.as_str(),
            &JsonContextRenderer,
            args.namespace.as_deref(),
        )
        .context("render input context")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}
