use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;

use submit_guard::checker::{RuleEvaluator, RuleId, Violation};
use submit_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs, ReportArgs};
use submit_guard::config::{DEFAULT_PROFILE, FileConfigLoader, RulesConfig, presets};
use submit_guard::discovery::JavaFileDiscovery;
use submit_guard::extractor::{JavaExtractor, SourceFile};
use submit_guard::output::{
    CheckOutcome, ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
    TreeFormatter,
};
use submit_guard::report::{
    CoverageReportBuilder, JunitReportBuilder, ReportNode, read_totals,
};
use submit_guard::scanner::LineScanner;
use submit_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Report(args) => run_report(args, &cli),
        Commands::Profiles => run_profiles(),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> submit_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), args.profile.as_deref())?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Scan and extract sources (parallel, no shared mutable state)
    let (files, mut violations) = if args.stdin {
        analyze_stdin(&config)?
    } else {
        let discovery = JavaFileDiscovery::new(&args.exclude)?;
        let paths = discovery.discover(&args.paths);
        analyze_files(&paths, &config)
    };
    let files_checked = files.len() + violations.len();

    // 4. Evaluate rules
    let evaluator = RuleEvaluator::new(config);
    violations.extend(evaluator.evaluate(&files));
    violations.sort();

    let outcome = CheckOutcome {
        files_checked,
        violations,
    };

    // 5. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &outcome, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    if args.warn_only || !outcome.has_errors() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS)
    }
}

/// Scan one file into its symbol model, or an `UnreadableFile` violation.
/// Per-file failures never abort the run.
fn analyze_one(
    path: &Path,
    scanner: &LineScanner,
    extractor: &JavaExtractor,
) -> Result<SourceFile, Violation> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let (lines, open_comment) = scanner.scan_with_state(&content);
            Ok(extractor.extract(path, lines, open_comment))
        }
        Err(e) => Err(Violation::new(
            RuleId::UnreadableFile,
            path,
            1,
            format!("cannot read file: {e}"),
        )),
    }
}

fn analyze_files(
    paths: &[PathBuf],
    config: &RulesConfig,
) -> (Vec<SourceFile>, Vec<Violation>) {
    let scanner = LineScanner::new(config.style.indentation.tab_width);
    let extractor = JavaExtractor::new(&config.testing.test_methods_prefix);

    let mut files = Vec::new();
    let mut violations = Vec::new();
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| analyze_one(path, &scanner, &extractor))
        .collect();
    for result in results {
        match result {
            Ok(file) => files.push(file),
            Err(violation) => violations.push(violation),
        }
    }
    (files, violations)
}

fn analyze_stdin(config: &RulesConfig) -> submit_guard::Result<(Vec<SourceFile>, Vec<Violation>)> {
    let content = std::io::read_to_string(std::io::stdin())?;
    let scanner = LineScanner::new(config.style.indentation.tab_width);
    let extractor = JavaExtractor::new(&config.testing.test_methods_prefix);
    let (lines, open_comment) = scanner.scan_with_state(&content);
    let file = extractor.extract(Path::new("<stdin>"), lines, open_comment);
    Ok((vec![file], Vec::new()))
}

fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_report_impl(args: &ReportArgs, cli: &Cli) -> submit_guard::Result<i32> {
    if args.junit.is_empty() && args.coverage.is_none() {
        return Err(submit_guard::SubmitGuardError::Config(
            "nothing to report: pass --junit and/or --coverage".to_string(),
        ));
    }

    let config = load_config(args.config.as_deref(), args.profile.as_deref())?;
    let threshold = args.threshold.unwrap_or(config.testing.coverage_threshold);
    let formatter = TreeFormatter::new(color_choice_to_mode(cli.color));

    let mut text = String::new();
    let mut failed = false;
    let mut tests_tree: Option<ReportNode> = None;
    let mut coverage_tree: Option<ReportNode> = None;
    let mut gap_tree: Option<ReportNode> = None;
    let mut totals_value = None;

    // Test results tree
    let junit_files = collect_report_files(&args.junit)?;
    if !junit_files.is_empty() {
        let tree = JunitReportBuilder::new().build_tree(&junit_files)?;
        failed = failed || tree.has_failure();
        text.push_str(&formatter.format_tree(&tree));
        tests_tree = Some(tree);
    }

    // Coverage tree, gap tree, and totals
    if let Some(coverage_path) = &args.coverage {
        let builder = CoverageReportBuilder::new(args.counter.to_kind());
        let tree = builder.build_tree(coverage_path)?;
        let totals = read_totals(coverage_path)?;

        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&formatter.format_tree(&tree));
        text.push('\n');
        text.push_str(&formatter.format_coverage_summary(&totals));

        match tree.gap_tree(threshold) {
            Some(gaps) => {
                text.push_str("\nCoverage gaps:\n");
                text.push_str(&formatter.format_tree(&gaps));
                gap_tree = Some(gaps);
            }
            None => {
                text.push_str("\nNo coverage gaps.\n");
            }
        }

        if config.testing.require_full_method_coverage && !totals.method.is_complete() {
            failed = true;
        }
        if config.testing.require_full_branch_coverage && !totals.branch.is_complete() {
            failed = true;
        }

        coverage_tree = Some(tree);
        totals_value = Some(totals);
    }

    let output = match args.format {
        OutputFormat::Text => text,
        OutputFormat::Json => {
            let value = serde_json::json!({
                "tests": tests_tree,
                "coverage": coverage_tree,
                "gaps": gap_tree,
                "totals": totals_value,
                "passed": !failed,
            });
            serde_json::to_string_pretty(&value)?
        }
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if failed {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Expand `--junit` arguments: a directory contributes every `.xml` file
/// beneath it, sorted; a file contributes itself. A missing path is a
/// collaborator failure, distinct from "checks failed".
fn collect_report_files(paths: &[PathBuf]) -> submit_guard::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(submit_guard::SubmitGuardError::ReportMissing {
                path: path.clone(),
            });
        }
        if path.is_dir() {
            let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_file())
                .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some("xml"))
                .map(walkdir::DirEntry::into_path)
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn run_profiles() -> i32 {
    for name in presets::AVAILABLE_PROFILES {
        if *name == DEFAULT_PROFILE {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
    EXIT_SUCCESS
}

fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs, cli: &Cli) -> submit_guard::Result<i32> {
    if args.output.exists() && !args.force {
        return Err(submit_guard::SubmitGuardError::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        )));
    }

    std::fs::write(&args.output, format!("{}\n", presets::PROFILE_CS2114))?;
    if !cli.quiet {
        println!("Created {}", args.output.display());
    }
    Ok(EXIT_SUCCESS)
}

fn load_config(
    config_path: Option<&Path>,
    profile: Option<&str>,
) -> submit_guard::Result<RulesConfig> {
    let loader = FileConfigLoader::new();
    config_path.map_or_else(
        || loader.load_profile(profile.unwrap_or(DEFAULT_PROFILE)),
        |path| loader.load_from_path(path),
    )
}

fn apply_cli_overrides(config: &mut RulesConfig, args: &CheckArgs) {
    if let Some(max_line_length) = args.max_line_length {
        config.style.max_line_length = max_line_length;
    }
    if args.no_javadoc {
        config.style.javadoc_required = false;
        config.style.javadoc_require_author = false;
        config.style.javadoc_require_version = false;
        config.style.javadoc_require_params = false;
        config.style.javadoc_require_return = false;
    }
    if args.no_author {
        config.style.javadoc_require_author = false;
    }
    if args.no_version {
        config.style.javadoc_require_version = false;
    }
    if args.allow_globals {
        config.style.disallow_global_variables = false;
    }
    if args.allow_empty {
        config.style.no_empty_methods = false;
    }
    if args.allow_unused {
        config.style.no_unused_methods = false;
    }
    if args.no_override {
        config.style.require_override = false;
    }
    if args.no_annotations {
        config.testing.annotation_required = false;
    }
    if args.no_delta {
        config.testing.require_assert_equals_delta = false;
    }
}

fn format_output(
    format: OutputFormat,
    outcome: &CheckOutcome,
    color_mode: ColorMode,
    verbose: u8,
) -> submit_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(outcome),
        OutputFormat::Json => JsonFormatter.format(outcome),
    }
}

fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> submit_guard::Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, content)?;
            if !quiet {
                println!("Results written to {}", path.display());
            }
        }
        None => {
            if !quiet {
                print!("{content}");
            }
        }
    }
    Ok(())
}
