use ladmin_bootstrap::domain::{FieldDeclaration, FieldKind, Markers, TypeMetadata};
use ladmin_bootstrap::processor::GlobalAdministrationConfigurationProcessor;
use ladmin_bootstrap::scanning::{CandidateType, StaticClassScanner, scan_namespaces};
use ladmin_bootstrap::source::{ConfigurationSourceFactory, DomainConfigurationSourceFactory};
use ladmin_bootstrap::{BootstrapError, GlobalAdministrationConfiguration};
use ladmin_kernel::MapPropertySource;
use proptest::prelude::*;

fn entity(domain_type: &'static str) -> TypeMetadata {
    TypeMetadata::new(domain_type)
        .name_field("name")
        .field(FieldDeclaration::new("id", FieldKind::Integer).identifier())
        .field(FieldDeclaration::new("name", FieldKind::Text).required())
}

fn bad_type() -> TypeMetadata {
    TypeMetadata::new("pkg.models.BadType").field(FieldDeclaration::new("name", FieldKind::Text))
}

fn processor(base_package: &str, scanner: StaticClassScanner) -> GlobalAdministrationConfigurationProcessor {
    GlobalAdministrationConfigurationProcessor::builder()
        .base_package(base_package)
        .scanner(scanner)
        .build()
}

#[test]
fn valid_candidates_are_registered_in_scan_order() {
    let scanner = StaticClassScanner::new()
        .declare("pkg.models", "Order", entity("pkg.models.Order"))
        .declare("pkg.models", "Customer", entity("pkg.models.Customer"));

    let registry = processor("pkg.models", scanner).run().unwrap();

    let names: Vec<_> = registry.iter().map(|c| c.entity.name.as_str()).collect();
    assert_eq!(names, ["Order", "Customer"]);
    assert_eq!(registry.len(), 2);

    let first = registry.get("pkg.models.Order").unwrap();
    let second = registry.get("pkg.models.Order").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.entity.id_field.as_deref(), Some("id"));
}

#[test]
fn first_violation_aborts_the_remaining_candidates() {
    let scanner = StaticClassScanner::new()
        .declare("pkg.models", "Order", entity("pkg.models.Order"))
        .declare("pkg.models", "BadType", bad_type())
        .declare("pkg.models", "Customer", entity("pkg.models.Customer"));

    let mut registry = GlobalAdministrationConfiguration::new();
    let err = processor("pkg.models", scanner).process(&mut registry).unwrap_err();

    let BootstrapError::ValidationViolation { ref type_name, ref rule, ref message, .. } = err else {
        panic!("expected a validation violation, got {err:?}");
    };
    assert_eq!(type_name.as_str(), "pkg.models.BadType");
    assert_eq!(rule, "identifier-declared");
    assert!(message.contains("missing required field"));

    let text = err.to_string();
    assert!(text.contains("pkg.models.BadType"));
    assert!(text.contains("identifier-declared"));

    let registered: Vec<_> = registry.iter().map(|c| c.domain_type.as_str()).collect();
    assert_eq!(registered, ["pkg.models.Order"]);
    assert!(!registry.contains("pkg.models.Customer"));
}

#[test]
fn a_failing_first_candidate_leaves_the_registry_empty() {
    let scanner = StaticClassScanner::new()
        .declare("pkg.models", "BadType", bad_type())
        .declare("pkg.models", "Order", entity("pkg.models.Order"));

    let mut registry = GlobalAdministrationConfiguration::new();
    assert!(processor("pkg.models", scanner).process(&mut registry).is_err());
    assert!(registry.is_empty());
}

#[test]
fn overlapping_namespaces_register_once() {
    let shared = CandidateType::new("pkg.shared", "Currency", Markers::ADMINISTRATION, entity("pkg.shared.Currency"));
    let scanner = StaticClassScanner::new()
        .declare("pkg.billing", "Invoice", entity("pkg.billing.Invoice"))
        .with(shared);

    let processor = processor("pkg.shared, pkg.billing;pkg.shared", scanner);
    assert_eq!(processor.namespaces().as_slice(), ["pkg.shared", "pkg.billing"]);

    let registry = processor.run().unwrap();
    let registered: Vec<_> = registry.domain_types().map(|d| d.as_str()).collect();
    assert_eq!(registered, ["pkg.shared.Currency", "pkg.billing.Invoice"]);
}

#[test]
fn namespaces_come_from_properties() {
    let properties = MapPropertySource::new().with("base_package", "pkg.models");
    let processor = GlobalAdministrationConfigurationProcessor::builder()
        .properties(&properties)
        .scanner(StaticClassScanner::new().declare("pkg.models", "Order", entity("pkg.models.Order")))
        .build();

    assert_eq!(processor.run().unwrap().len(), 1);

    let unconfigured = GlobalAdministrationConfigurationProcessor::from_properties(&MapPropertySource::new());
    assert!(unconfigured.namespaces().is_empty());
    assert!(unconfigured.run().unwrap().is_empty());
}

#[test]
fn configuration_sources_are_rebuilt_identically() {
    let candidate = CandidateType::new("pkg.models", "Order", Markers::ADMINISTRATION, entity("pkg.models.Order"));
    let factory = DomainConfigurationSourceFactory;
    assert_eq!(
        factory.create_configuration_source(&candidate).unwrap(),
        factory.create_configuration_source(&candidate).unwrap()
    );
}

const POOL: [&str; 4] = ["pkg.a", "pkg.b", "pkg.c", "pkg.d"];

proptest! {
    #[test]
    fn merged_candidates_follow_first_namespace_discovery(picks in proptest::collection::vec(0..POOL.len(), 0..10)) {
        let scanner = POOL.iter().fold(StaticClassScanner::new(), |scanner, namespace| {
            scanner
                .declare(namespace, "Shared", TypeMetadata::new("x"))
                .declare(namespace, "Own", TypeMetadata::new("y"))
        });
        let namespaces: Vec<&str> = picks.iter().map(|&i| POOL[i]).collect();

        let merged = scan_namespaces(&scanner, &namespaces);

        let mut expected: Vec<String> = Vec::new();
        for namespace in &namespaces {
            for name in ["Shared", "Own"] {
                let id = format!("{namespace}.{name}");
                if !expected.contains(&id) {
                    expected.push(id);
                }
            }
        }
        let actual: Vec<String> = merged.iter().map(|c| c.id().to_string()).collect();
        prop_assert_eq!(actual, expected);
    }
}
