//! Interactive front end for the IPD lab
//!
//! Enumerates engines and strategies from the registry, walks the user
//! through selection and configuration (retrying on rejected values), then
//! prints the engine's report.

use anyhow::Context;
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use ipd_logic::{ConfigField, ConfigValue, ConfigValues, Engine, Registry, StrategyEntry};

fn main() -> anyhow::Result<()> {
    init_logger();

    let registry = Registry::with_builtins();

    let mut engine = choose_engine(&registry)?;
    println!("{}\n", engine.description());

    let pool = choose_strategies(&registry)?;
    for entry in &pool {
        println!(" {} - {}", entry.name().bold(), entry.instantiate().description());
    }
    engine.set_strategies(pool);

    configure(engine.as_mut())?;

    let report = engine.run_simulation().context("simulation failed")?;
    println!("\n{report}");

    Ok(())
}

/// Terminal logger, INFO and up. Match-by-match detail sits at DEBUG.
fn init_logger() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

fn choose_engine(registry: &Registry) -> anyhow::Result<Box<dyn Engine>> {
    let names: Vec<&str> = registry.engines().iter().map(|e| e.name()).collect();
    let choice = Select::new()
        .with_prompt("Choose your engine")
        .items(&names)
        .default(0)
        .interact()?;
    println!("Chose engine {}\n", names[choice].bold());
    Ok(registry.engines()[choice].instantiate())
}

fn choose_strategies(registry: &Registry) -> anyhow::Result<Vec<StrategyEntry>> {
    let entries = registry.strategies();
    let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
    let all_selected = vec![true; names.len()];
    let picked = MultiSelect::new()
        .with_prompt("Strategies to include (space toggles, enter confirms)")
        .items(&names)
        .defaults(&all_selected)
        .interact()?;
    Ok(picked.into_iter().map(|i| entries[i]).collect())
}

/// Prompt for every schema field, confirm, and submit to the engine.
/// Loops until the engine accepts; the engine never retries on its own.
fn configure(engine: &mut dyn Engine) -> anyhow::Result<()> {
    let schema = engine.configuration();
    loop {
        println!("\n--Engine Configuration--");
        let mut values = ConfigValues::new();
        for (name, field) in &schema {
            values.insert(name.clone(), prompt_field(field)?);
        }

        println!("\nConfiguration to be used:");
        for (name, field) in &schema {
            println!("  {} = {}", field.label, values[name.as_str()]);
        }
        if !Confirm::new()
            .with_prompt("Use this configuration?")
            .default(true)
            .interact()?
        {
            continue;
        }

        match engine.set_configuration(&values) {
            Ok(()) => return Ok(()),
            Err(error) => {
                println!("{} {}", "Rejected:".red(), error);
                log::warn!("configuration rejected, retrying");
            }
        }
    }
}

/// One field: empty input takes the default, anything else must parse as the
/// field's kind (re-prompted inline until it does).
fn prompt_field(field: &ConfigField) -> anyhow::Result<ConfigValue> {
    let kind = field.kind;
    let input: String = Input::new()
        .with_prompt(format!(
            "{} [{}, default {}]",
            field.label,
            kind.name(),
            field.default
        ))
        .allow_empty(true)
        .validate_with(|text: &String| -> Result<(), String> {
            if text.is_empty() {
                return Ok(());
            }
            kind.parse(text).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    if input.is_empty() {
        Ok(field.default.clone())
    } else {
        Ok(kind.parse(&input)?)
    }
}
