#![allow(dead_code)]

use ladmin_bootstrap::Administration;
use ladmin_bootstrap::domain::{FieldKind, Units};
use ladmin_bootstrap::processor::GlobalAdministrationConfigurationProcessor;
use ladmin_bootstrap::scanning::{AdministrationClassScanner, ClassScanner};

mod models {
    use super::Administration;

    #[derive(Administration)]
    #[administration(namespace = "shop.models", name_field = "number", scope = "open", default_scope = "all")]
    pub struct Order {
        #[administration(id, views = "list, show")]
        pub id: u64,
        #[administration(required, filter)]
        pub number: String,
        #[administration(association = "shop.models.Customer")]
        pub customer: Option<u64>,
        pub total: f64,
        #[administration(skip)]
        pub cache: Vec<u8>,
    }

    #[derive(Administration)]
    #[administration(namespace = "shop.models", label = "Client", plural = "Clients", entity)]
    pub struct Customer {
        #[administration(id)]
        pub id: u64,
        #[administration(label = "Full name")]
        pub full_name: String,
    }

    /// Hidden: registered, never scanned.
    #[derive(Administration)]
    #[administration(namespace = "shop.models", hidden)]
    pub struct AuditTrail {
        pub id: u64,
    }
}

mod broken {
    use super::Administration;

    #[derive(Administration)]
    #[administration(namespace = "shop.broken")]
    pub struct BadType {
        pub name: String,
    }

    #[derive(Administration)]
    #[administration(namespace = "shop.broken")]
    pub struct Product {
        #[administration(id)]
        pub sku: String,
    }
}

#[test]
fn scanner_finds_declared_types_sorted_by_name() {
    let found = AdministrationClassScanner::new().scan("shop.models");
    let ids: Vec<_> = found.iter().map(|c| c.id().as_str()).collect();
    assert_eq!(ids, ["shop.models.Customer", "shop.models.Order"]);
}

#[test]
fn derived_declarations_become_configurations() {
    let registry = GlobalAdministrationConfigurationProcessor::builder()
        .base_package("shop.models")
        .build()
        .run()
        .unwrap();

    assert_eq!(registry.len(), 2);

    let order = registry.get("shop.models.Order").unwrap();
    assert_eq!(order.entity.name, "Order");
    assert_eq!(order.entity.plural_name, "Orders");
    assert_eq!(order.entity.name_field.as_deref(), Some("number"));
    assert_eq!(order.default_scope.as_deref(), Some("all"));
    assert_eq!(order.scopes, ["open", "all"]);

    let list: Vec<_> = order.view(Units::LIST).iter().map(|f| f.name.as_str()).collect();
    assert_eq!(list, ["id", "number", "customer", "total"]);
    let form: Vec<_> = order.view(Units::FORM).iter().map(|f| f.name.as_str()).collect();
    assert_eq!(form, ["number", "customer", "total"]);
    assert_eq!(order.filters.len(), 1);
    assert!(matches!(order.list_view[2].kind, FieldKind::Association { .. }));
    assert_eq!(order.list_view[3].kind, FieldKind::Decimal);

    let customer = registry.get("shop.models.Customer").unwrap();
    assert_eq!(customer.entity.name, "Client");
    assert_eq!(customer.entity.plural_name, "Clients");
    assert_eq!(customer.list_view[1].label, "Full name");
}

#[test]
fn broken_declaration_aborts_with_the_rule() {
    let err = GlobalAdministrationConfigurationProcessor::builder()
        .base_package("shop.broken")
        .build()
        .run()
        .unwrap_err();

    assert_eq!(err.type_name().map(|t| t.as_str()), Some("shop.broken.BadType"));
    assert_eq!(err.rule(), Some("identifier-declared"));
}
