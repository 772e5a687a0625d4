use ladmin_domain::administration::AdministrationConfigurationInner;
use ladmin_domain::{
    AdministrationConfiguration, EntityConfiguration, FieldConfiguration, FieldKind, Units,
};

fn field(name: &str) -> FieldConfiguration {
    FieldConfiguration {
        name: name.to_owned(),
        label: name.to_owned(),
        kind: FieldKind::Text,
        required: false,
    }
}

fn sample() -> AdministrationConfiguration {
    AdministrationConfiguration::new(AdministrationConfigurationInner {
        domain_type: "pkg.models.Order".into(),
        configuration_type: "pkg.models.Order".into(),
        entity: EntityConfiguration {
            name: "Order".to_owned(),
            plural_name: "Orders".to_owned(),
            name_field: Some("number".to_owned()),
            id_field: Some("id".to_owned()),
        },
        list_view: vec![field("id"), field("number")],
        quick_view: vec![field("number")],
        show_view: vec![],
        form_view: vec![field("number")],
        filters: vec![field("number")],
        scopes: vec!["all".to_owned()],
        default_scope: Some("all".to_owned()),
    })
}

#[test]
fn views_select_the_matching_unit() {
    let cfg = sample();
    assert_eq!(cfg.view(Units::LIST).len(), 2);
    assert_eq!(cfg.view(Units::QUICK)[0].name, "number");
    assert!(cfg.view(Units::SHOW).is_empty());
    assert_eq!(cfg.view(Units::FILTER).len(), 1);
    assert!(cfg.view(Units::LIST | Units::FORM).is_empty());
}

#[test]
fn clones_share_storage_and_compare_equal() {
    let cfg = sample();
    let clone = cfg.clone();
    assert!(cfg.ptr_eq(&clone));
    assert_eq!(cfg, sample());
    assert!(!cfg.ptr_eq(&sample()));
}

#[test]
fn serializes_flat() {
    let value = serde_json::to_value(sample()).expect("serialize");
    assert_eq!(value["domainType"], "pkg.models.Order");
    assert_eq!(value["entity"]["pluralName"], "Orders");
    assert_eq!(value["listView"][1]["kind"]["kind"], "text");
}
