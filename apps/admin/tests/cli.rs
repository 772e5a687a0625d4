use clap::Parser;
use ladmin_admin::{Cli, DEMO_NAMESPACE, summary};
use ladmin_bootstrap::domain::{FieldDeclaration, FieldKind, TypeMetadata, Units};
use ladmin_bootstrap::scanning::StaticClassScanner;
use lightadmin::GlobalAdministrationConfigurationProcessor;
use std::fs;
use tempfile::tempdir;

fn settings_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lightadmin.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn base_package_comes_from_the_settings_file() {
    let (_dir, path) = settings_file("base_package = \"pkg.models\"\n[logging]\nlevel = \"debug\"\n");
    let cli = Cli::parse_from(["lightadmin", "--config", path.to_str().unwrap()]);

    let settings = cli.settings().unwrap();
    assert_eq!(settings.base_package.as_deref(), Some("pkg.models"));
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn command_line_overrides_and_demo_flag() {
    let (_dir, path) = settings_file("base_package = \"pkg.models\"\n");
    let cli = Cli::parse_from([
        "lightadmin",
        "--config",
        path.to_str().unwrap(),
        "--base-package",
        "pkg.billing",
        "--demo",
    ]);

    let settings = cli.settings().unwrap();
    assert_eq!(settings.base_package.as_deref(), Some(format!("pkg.billing, {DEMO_NAMESPACE}").as_str()));
}

#[test]
fn missing_explicit_settings_file_fails() {
    let cli = Cli::parse_from(["lightadmin", "-c", "/definitely/not/here.toml"]);
    assert!(cli.settings().is_err());
}

#[test]
fn summary_lists_registered_types_in_order() {
    let scanner = StaticClassScanner::new()
        .declare(
            "pkg",
            "Order",
            TypeMetadata::new("pkg.Order")
                .field(FieldDeclaration::new("id", FieldKind::Integer).identifier())
                .field(FieldDeclaration::new("number", FieldKind::Text).units(Units::ALL_VIEWS | Units::FILTER)),
        )
        .declare(
            "pkg",
            "Customer",
            TypeMetadata::new("pkg.Customer").field(FieldDeclaration::new("id", FieldKind::Integer).identifier()),
        );
    let registry = GlobalAdministrationConfigurationProcessor::builder()
        .base_package("pkg")
        .scanner(scanner)
        .build()
        .run()
        .unwrap();

    assert_eq!(
        summary(&registry),
        [
            "2 administered domain type(s)",
            "pkg.Order (Orders): 2 list field(s), 1 filter(s)",
            "pkg.Customer (Customers): 1 list field(s), 0 filter(s)",
        ]
    );
}
