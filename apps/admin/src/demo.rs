//! Demo shop models, scanned when the binary runs with `--demo`.

#![allow(dead_code)]

use ladmin_bootstrap::Administration;

#[derive(Administration)]
#[administration(namespace = "lightadmin.demo", name_field = "number", scope = "open", default_scope = "all")]
struct Order {
    #[administration(id, views = "list, show")]
    id: u64,
    #[administration(required, filter)]
    number: String,
    #[administration(association = "lightadmin.demo.Customer", filter)]
    customer: u64,
    #[administration(collection = "lightadmin.demo.OrderLine", views = "show, form")]
    lines: Vec<u64>,
    total: f64,
    placed_on: String,
}

#[derive(Administration)]
#[administration(namespace = "lightadmin.demo", name_field = "full_name", entity)]
struct Customer {
    #[administration(id)]
    id: u64,
    #[administration(required, filter, label = "Name")]
    full_name: String,
    email: Option<String>,
    vip: bool,
}

#[derive(Administration)]
#[administration(namespace = "lightadmin.demo", label = "Order line", plural = "Order lines")]
struct OrderLine {
    #[administration(id)]
    id: u64,
    #[administration(association = "lightadmin.demo.Order")]
    order: u64,
    product: String,
    quantity: u32,
}

#[cfg(test)]
mod tests {
    use ladmin_admin::DEMO_NAMESPACE;
    use lightadmin::GlobalAdministrationConfigurationProcessor;
    use lightadmin::domain::Units;

    #[test]
    fn demo_models_pass_the_bootstrap() {
        let registry = GlobalAdministrationConfigurationProcessor::builder()
            .base_package(DEMO_NAMESPACE)
            .build()
            .run()
            .unwrap();

        let types: Vec<_> = registry.domain_types().map(|d| d.as_str()).collect();
        assert_eq!(types, ["lightadmin.demo.Customer", "lightadmin.demo.Order", "lightadmin.demo.OrderLine"]);

        let order = registry.get("lightadmin.demo.Order").unwrap();
        assert_eq!(order.filters.len(), 2);
        assert_eq!(order.view(Units::QUICK).len(), 4);
        assert_eq!(order.default_scope.as_deref(), Some("all"));

        let line = registry.get("lightadmin.demo.OrderLine").unwrap();
        assert_eq!(line.entity.plural_name, "Order lines");
    }
}
