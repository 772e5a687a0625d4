use ladmin_bootstrap::scanning::Administered;
use ladmin_derive::Administration;

#[derive(Administration)]
#[administration(namespace = "ui.models", name_field = "title", default_scope = "all")]
pub struct Book {
    #[administration(id, views = "list, show")]
    pub id: u64,
    #[administration(required, label = "Book title")]
    pub title: String,
    #[administration(association = "ui.models.Author")]
    pub author: Option<u64>,
}

fn main() {
    assert_eq!(Book::NAMESPACE, "ui.models");
    assert_eq!(Book::NAME, "Book");

    let metadata = Book::type_metadata();
    assert_eq!(metadata.domain_type.as_str(), "ui.models.Book");
    assert_eq!(metadata.name_field.as_deref(), Some("title"));
    assert_eq!(metadata.fields.len(), 3);
    assert!(metadata.fields[0].identifier);
    assert_eq!(metadata.fields[1].label.as_deref(), Some("Book title"));
    assert_eq!(metadata.scopes.len(), 1);
}
