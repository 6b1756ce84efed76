//! Per-tab toolbar toggle
//!
//! Each browser tab gets its own machine:
//! - `load`:   unloaded -> loaded, injects the bundle
//! - `inject`: loaded | ejected -> injected, shows the toolbar
//! - `eject`:  injected -> ejected, hides the toolbar
//! - `unload`: loaded | ejected | injected -> unloaded, on page navigation
//!
//! Host calls are logged instead of executed.
//!
//! Run with: RUST_LOG=debug cargo run --example tab_toggle

use tabstate::builder::{create_transition, StateMachineBuilder};
use tabstate::registry::MachineRegistry;
use tabstate::{MachineDefinition, TransitionError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type TabId = u32;

fn execute_script(tab: TabId, file: &str) {
    tracing::info!(tab, file, "executeScript");
}

fn insert_css(tab: TabId, file: &str) {
    tracing::info!(tab, file, "insertCSS");
}

fn extension_definition() -> Result<MachineDefinition<String, TabId>, tabstate::BuildError> {
    StateMachineBuilder::<String, TabId>::new()
        .initial("unloaded")
        .transition("load", create_transition("unloaded", "loaded"))
        .transition("inject", create_transition(["loaded", "ejected"], "injected"))
        .transition("eject", create_transition("injected", "ejected"))
        .transition(
            "unload",
            create_transition(["loaded", "ejected", "injected"], "unloaded"),
        )
        .on("load", |_, tab| {
            insert_css(tab, "build/bundle.css");
            execute_script(tab, "web-components.polyfill.js");
            execute_script(tab, "build/bundle.js");
            Ok(())
        })
        .on("inject", |_, tab| {
            execute_script(tab, "toolbar/inject.js");
            Ok(())
        })
        .on("eject", |_, tab| {
            execute_script(tab, "toolbar/eject.js");
            Ok(())
        })
        .build()
}

type Tabs = MachineRegistry<TabId, String, TabId>;

/// Toolbar button clicked in `tab`.
fn toggle(tabs: &mut Tabs, tab: TabId) -> Result<(), TransitionError> {
    let extension = tabs.entry(tab);
    let steps: &[&str] = match extension.state().as_str() {
        "unloaded" => &["load", "inject"],
        "injected" => &["eject"],
        _ => &["inject"],
    };
    for step in steps {
        if let Some(result) = extension.fire(step, tab) {
            result?;
        }
    }
    Ok(())
}

/// The page in `tab` navigated; injected scripts are gone.
fn tab_updated(tabs: &mut Tabs, tab: TabId) -> Result<(), TransitionError> {
    match tabs.get_mut(&tab) {
        Some(extension) if extension.can_fire("unload") => {
            extension.fire("unload", tab).unwrap_or(Ok(()))
        }
        _ => Ok(()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let mut tabs = Tabs::new(extension_definition()?);

    toggle(&mut tabs, 1)?;
    toggle(&mut tabs, 2)?;
    toggle(&mut tabs, 1)?;
    toggle(&mut tabs, 1)?;
    tab_updated(&mut tabs, 1)?;
    tab_updated(&mut tabs, 3)?;
    toggle(&mut tabs, 1)?;

    for (tab, extension) in tabs.iter() {
        tracing::info!(
            tab,
            state = extension.state().as_str(),
            path = ?extension.history().names(),
            "final"
        );
    }

    Ok(())
}
