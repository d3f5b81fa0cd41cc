use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use catalog_model::{CatalogError, ComponentConfig, ComponentRow, DiagramDocument};
use catalog_render::{RenderOptions, TemplateEngine};
use catalog_search::{FuzzyTreeFilter, SearchOptions};
use catalog_store::{CatalogSource, CheckReport, DirectoryStore, catalog_root, check_catalog};
use catalog_tree::{AmbiguityPolicy, CatalogTree, TreeBuilder};

use catalog_cli::outline::format_outline;
use catalog_cli::tables::{check_table, component_table, matches_table};

use crate::cli::{CheckArgs, RenderArgs, SearchArgs, SearchPresetArg, ShowArgs, TreeArgs};

/// Catalog store for the `--catalog` flag or the configured default.
pub fn open_store(catalog: Option<&Path>) -> DirectoryStore {
    let root = catalog.map_or_else(catalog_root, Path::to_path_buf);
    debug!(root = %root.display(), "using catalog");
    DirectoryStore::new(root)
}

pub fn run_tree(store: &dyn CatalogSource, args: &TreeArgs) -> Result<()> {
    let tree = load_tree(store, ambiguity_policy(args.last_wins))?;
    if tree.is_empty() {
        println!("Catalog is empty.");
        return Ok(());
    }
    print!("{}", format_outline(&tree.view()));
    Ok(())
}

pub fn run_search(store: &dyn CatalogSource, args: &SearchArgs) -> Result<()> {
    let span = info_span!("search", query = %args.query);
    let _guard = span.enter();

    let tree = load_tree(store, ambiguity_policy(args.last_wins))?;
    let filter = FuzzyTreeFilter::new(search_options(args));
    let view = filter.filter(&tree, &args.query);
    if view.is_empty() {
        println!("No components match '{}'.", args.query);
        return Ok(());
    }
    print!("{}", format_outline(&view));

    if args.explain {
        let scores = filter.matches(&tree, &args.query);
        println!();
        println!("{}", matches_table(&tree, &scores));
    }
    info!(leaves = view.leaves().len(), "search finished");
    Ok(())
}

pub fn run_show(store: &dyn CatalogSource, args: &ShowArgs) -> Result<()> {
    let (config, _) = load_component(store, &args.path)?;
    if let Some(row) = args.row {
        ensure_row(&config, row)?;
    }
    println!("Component: {}", config.name);
    println!("Standard: {}", config.standard);
    if let Some(meta) = &config.meta {
        println!("Id: {} (version {})", meta.id, meta.version);
    }
    println!("{}", component_table(&config, args.row));
    Ok(())
}

pub fn run_render(store: &dyn CatalogSource, args: &RenderArgs) -> Result<()> {
    let span = info_span!("render", path = %args.path);
    let _guard = span.enter();

    let (config, diagram) = load_component(store, &args.path)?;
    let row = match args.row {
        Some(index) => Some(ensure_row(&config, index)?),
        None => None,
    };
    let engine = TemplateEngine::new(RenderOptions {
        legacy_fallback: !args.no_legacy,
    });
    let rendered = engine.render_row(&diagram, &config, row);

    match &args.output {
        Some(path) => {
            write_output(path, &rendered)?;
            info!(output = %path.display(), "diagram written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

pub fn run_check(store: &dyn CatalogSource, args: &CheckArgs) -> Result<CheckReport> {
    let report = check_catalog(store).map_err(unavailable)?;
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize check report")?;
        println!("{json}");
    } else {
        println!("{}", check_table(&report));
        println!(
            "{} components, {} ok, {} failed, {} warnings",
            report.counts.components, report.counts.ok, report.counts.failed, report.counts.warnings
        );
    }
    Ok(report)
}

fn ambiguity_policy(last_wins: bool) -> AmbiguityPolicy {
    if last_wins {
        AmbiguityPolicy::LastWins
    } else {
        AmbiguityPolicy::Reject
    }
}

fn load_tree(store: &dyn CatalogSource, policy: AmbiguityPolicy) -> Result<CatalogTree> {
    let paths = store.list_component_paths().map_err(unavailable)?;
    TreeBuilder::new()
        .with_policy(policy)
        .build(&paths)
        .context("build catalog tree")
}

fn load_component(
    store: &dyn CatalogSource,
    path: &str,
) -> Result<(ComponentConfig, DiagramDocument)> {
    store.load_component(path).map_err(unavailable)
}

fn ensure_row(config: &ComponentConfig, index: usize) -> Result<&ComponentRow> {
    config.row(index).ok_or_else(|| {
        anyhow!(
            "row {index} out of range: {} has {} rows",
            config.name,
            config.data.len()
        )
    })
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

fn search_options(args: &SearchArgs) -> SearchOptions {
    let options = match args.preset {
        Some(SearchPresetArg::Strict) => SearchOptions::strict(),
        Some(SearchPresetArg::Relaxed) => SearchOptions::relaxed(),
        Some(SearchPresetArg::Default) | None => SearchOptions::default(),
    };
    match args.threshold {
        Some(threshold) => options.with_threshold(threshold),
        None => options,
    }
}

/// Store failures are reported as an unavailable component.
fn unavailable(err: CatalogError) -> anyhow::Error {
    if err.is_unavailable() {
        anyhow!("component unavailable: {err}")
    } else {
        anyhow::Error::new(err)
    }
}
