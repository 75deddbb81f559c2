use clap::Parser;
use imgmeta::cli::Cli;
use imgmeta::cli::command::Command;
use imgmeta::cli::command::cache::cache_command::CacheCommand;
use imgmeta::cli::command::settings::settings_command::SettingsCommand;
use imgmeta::cli::command::show::output_format::OutputFormat;
use imgmeta::cli::json_log_behaviour::JsonLogBehaviour;
use imgmeta::map_service::MapService;

#[test]
fn no_command_parses() {
    let cli = Cli::try_parse_from(["imgmeta"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn show_parses_with_defaults() {
    let cli = Cli::try_parse_from(["imgmeta", "show", "photo.jpg"]).unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show");
    };
    assert_eq!(args.path, "photo.jpg");
    assert_eq!(args.output, OutputFormat::Auto);
    assert!(args.filter.is_none());
    assert!(!args.no_cache);
}

#[test]
fn show_accepts_filter_and_output() {
    let cli = Cli::try_parse_from([
        "imgmeta", "show", "photo.jpg", "--output", "json", "--filter", "^gps", "--no-cache",
    ])
    .unwrap();
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show");
    };
    assert_eq!(args.output, OutputFormat::Json);
    assert_eq!(args.filter.as_deref(), Some("^gps"));
    assert!(args.no_cache);
}

#[test]
fn gps_service_uses_short_names() {
    let cli = Cli::try_parse_from(["imgmeta", "gps", "a.jpg", "--service", "osm"]).unwrap();
    let Some(Command::Gps(args)) = cli.command else {
        panic!("expected gps");
    };
    assert_eq!(args.service, Some(MapService::OpenStreetMap));
    assert!(Cli::try_parse_from(["imgmeta", "gps", "a.jpg", "--service", "yahoo"]).is_err());
}

#[test]
fn export_batch_compare_parse() {
    assert!(
        Cli::try_parse_from(["imgmeta", "export", "a.jpg", "--format", "text", "--output-file", "a.txt"])
            .is_ok()
    );
    assert!(Cli::try_parse_from(["imgmeta", "batch", "photos", "--results", "out.txt"]).is_ok());
    assert!(Cli::try_parse_from(["imgmeta", "compare", "a.jpg", "b.jpg", "--only-differences"]).is_ok());
    assert!(Cli::try_parse_from(["imgmeta", "compare", "a.jpg"]).is_err());
}

#[test]
fn preview_requires_output() {
    assert!(Cli::try_parse_from(["imgmeta", "preview", "a.jpg"]).is_err());
    let cli = Cli::try_parse_from([
        "imgmeta", "preview", "a.jpg", "--output", "p.png", "--brightness", "1.5", "--size", "200",
    ])
    .unwrap();
    let Some(Command::Preview(args)) = cli.command else {
        panic!("expected preview");
    };
    assert!((args.brightness - 1.5).abs() < f32::EPSILON);
    assert!((args.contrast - 1.0).abs() < f32::EPSILON);
    assert_eq!(args.size, Some(200));
}

#[test]
fn strip_and_recent_parse() {
    assert!(Cli::try_parse_from(["imgmeta", "strip", "a.jpg", "--output", "b.jpg"]).is_ok());
    assert!(Cli::try_parse_from(["imgmeta", "recent", "list"]).is_ok());
    assert!(Cli::try_parse_from(["imgmeta", "recent", "clear"]).is_ok());
}

#[test]
fn cache_subcommands_parse() {
    let cli = Cli::try_parse_from(["imgmeta", "cache", "clean", "--dry-run"]).unwrap();
    let Some(Command::Cache(args)) = cli.command else {
        panic!("expected cache");
    };
    assert!(matches!(args.command, CacheCommand::Clean(ref a) if a.dry_run));
    assert!(Cli::try_parse_from(["imgmeta", "cache", "show", "a.jpg"]).is_ok());
}

#[test]
fn settings_set_parses_typed_values() {
    let cli = Cli::try_parse_from([
        "imgmeta",
        "settings",
        "set",
        "--map-service",
        "bing",
        "--cache-enabled",
        "false",
        "--recent-max",
        "5",
    ])
    .unwrap();
    let Some(Command::Settings(args)) = cli.command else {
        panic!("expected settings");
    };
    let SettingsCommand::Set(set) = args.command else {
        panic!("expected set");
    };
    assert_eq!(set.map_service, Some(MapService::BingMaps));
    assert_eq!(set.cache_enabled, Some(false));
    assert_eq!(set.recent_max, Some(5));
    assert_eq!(set.preview_size, None);
    assert!(Cli::try_parse_from(["imgmeta", "settings", "set", "--recent-max", "many"]).is_err());
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = Cli::try_parse_from([
        "imgmeta", "show", "a.jpg", "--debug", "--json-logs", "--log-file", "logs/out.jsonl",
    ])
    .unwrap();
    assert!(cli.global_args.debug);
    assert_eq!(
        cli.global_args.json_log_behaviour(),
        JsonLogBehaviour::StderrAndFile("logs/out.jsonl".into())
    );
}
