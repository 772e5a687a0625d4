use crate::macros::error::single_generic;
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Field, Fields, LitStr, Type};

const VIEW_NAMES: &[&str] = &["list", "quick", "show", "form", "filter", "all", "*"];

#[derive(Default)]
struct TypeArgs {
    namespace: Option<LitStr>,
    domain_type: Option<LitStr>,
    label: Option<LitStr>,
    plural: Option<LitStr>,
    name_field: Option<LitStr>,
    scopes: Vec<(LitStr, bool)>,
    entity: bool,
    hidden: bool,
}

#[derive(Default)]
struct FieldArgs {
    id: bool,
    required: bool,
    skip: bool,
    filter: bool,
    label: Option<LitStr>,
    views: Option<LitStr>,
    association: Option<LitStr>,
    collection: Option<LitStr>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Administration cannot be derived for generic types",
        ));
    }
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(ident, "Administration can only be derived for structs"));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            ident,
            "Administration requires a struct with named fields",
        ));
    };

    let args = type_args(input)?;
    let Some(namespace) = &args.namespace else {
        return Err(syn::Error::new_spanned(
            ident,
            "missing #[administration(namespace = \"...\")] on the declared type",
        ));
    };

    let type_name = ident.to_string();
    let domain_type = args.domain_type.clone().unwrap_or_else(|| {
        LitStr::new(&qualified(&namespace.value(), &type_name), namespace.span())
    });

    let mut declarations = Vec::new();
    for field in &fields.named {
        let field_args = field_args(field)?;
        if field_args.skip {
            continue;
        }
        declarations.push(field_declaration(field, &field_args)?);
    }

    let label = args.label.as_ref().map(|l| quote! { .label(#l) });
    let plural = args.plural.as_ref().map(|p| quote! { .plural(#p) });
    let name_field = args.name_field.as_ref().map(|n| quote! { .name_field(#n) });
    let scopes = args.scopes.iter().map(|(name, default)| {
        if *default {
            quote! { .scope(::ladmin_bootstrap::domain::ScopeDeclaration::default_scope(#name)) }
        } else {
            quote! { .scope(::ladmin_bootstrap::domain::ScopeDeclaration::new(#name)) }
        }
    });

    let mut markers = vec![quote! { ::ladmin_bootstrap::domain::Markers::ADMINISTRATION }];
    if args.entity {
        markers.push(quote! { ::ladmin_bootstrap::domain::Markers::ENTITY });
    }
    if args.hidden {
        markers.push(quote! { ::ladmin_bootstrap::domain::Markers::HIDDEN });
    }
    let markers = quote! {
        ::ladmin_bootstrap::domain::Markers::from_bits_truncate(0 #(| #markers.bits())*)
    };

    Ok(quote! {
        #[automatically_derived]
        impl ::ladmin_bootstrap::scanning::Administered for #ident {
            const NAMESPACE: &'static str = #namespace;
            const NAME: &'static str = #type_name;

            fn type_metadata() -> ::ladmin_bootstrap::domain::TypeMetadata {
                ::ladmin_bootstrap::domain::TypeMetadata::new(#domain_type)
                    #label
                    #plural
                    #name_field
                    #(.field(#declarations))*
                    #(#scopes)*
            }
        }

        ::ladmin_bootstrap::inventory::submit! {
            ::ladmin_bootstrap::scanning::TypeRegistration::new(
                #namespace,
                #type_name,
                #markers,
                <#ident as ::ladmin_bootstrap::scanning::Administered>::type_metadata,
            )
        }
    })
}

fn qualified(namespace: &str, name: &str) -> String {
    if namespace.is_empty() { name.to_owned() } else { format!("{namespace}.{name}") }
}

fn type_args(input: &DeriveInput) -> syn::Result<TypeArgs> {
    let mut args = TypeArgs::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("administration")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("namespace") {
                args.namespace = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("domain_type") {
                args.domain_type = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("label") {
                args.label = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("plural") {
                args.plural = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("name_field") {
                args.name_field = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("scope") {
                args.scopes.push((meta.value()?.parse()?, false));
            } else if meta.path.is_ident("default_scope") {
                args.scopes.push((meta.value()?.parse()?, true));
            } else if meta.path.is_ident("entity") {
                args.entity = true;
            } else if meta.path.is_ident("hidden") {
                args.hidden = true;
            } else {
                return Err(meta.error("unsupported administration type attribute"));
            }
            Ok(())
        })?;
    }
    Ok(args)
}

fn field_args(field: &Field) -> syn::Result<FieldArgs> {
    let mut args = FieldArgs::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("administration")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                args.id = true;
            } else if meta.path.is_ident("required") {
                args.required = true;
            } else if meta.path.is_ident("skip") {
                args.skip = true;
            } else if meta.path.is_ident("filter") {
                args.filter = true;
            } else if meta.path.is_ident("label") {
                args.label = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("views") {
                let views: LitStr = meta.value()?.parse()?;
                if let Some(bad) = views
                    .value()
                    .split(',')
                    .map(str::trim)
                    .find(|v| !VIEW_NAMES.contains(v))
                {
                    return Err(syn::Error::new(views.span(), format!("unknown view `{bad}`")));
                }
                args.views = Some(views);
            } else if meta.path.is_ident("association") {
                args.association = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("collection") {
                args.collection = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("unsupported administration field attribute"));
            }
            Ok(())
        })?;
    }
    Ok(args)
}

fn field_declaration(field: &Field, args: &FieldArgs) -> syn::Result<TokenStream> {
    let Some(ident) = &field.ident else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let name = ident.to_string().trim_start_matches("r#").to_owned();

    let kind = match (&args.association, &args.collection) {
        (Some(_), Some(other)) => {
            return Err(syn::Error::new(
                other.span(),
                "a field is either an association or a collection, not both",
            ));
        },
        (Some(target), None) => quote! {
            ::ladmin_bootstrap::domain::FieldKind::Association { target: #target.into() }
        },
        (None, Some(target)) => quote! {
            ::ladmin_bootstrap::domain::FieldKind::Collection { target: #target.into() }
        },
        (None, None) => infer_kind(&field.ty),
    };

    let units = units(args);
    let label = args.label.as_ref().map(|l| quote! { .label(#l) });
    let required = args.required.then(|| quote! { .required() });
    let identifier = args.id.then(|| quote! { .identifier() });

    Ok(quote_spanned! {field.span()=>
        ::ladmin_bootstrap::domain::FieldDeclaration::new(#name, #kind)
            .units(#units)
            #label
            #required
            #identifier
    })
}

fn units(args: &FieldArgs) -> TokenStream {
    let mut names: Vec<String> = args.views.as_ref().map_or_else(
        || vec!["all".to_owned()],
        |views| views.value().split(',').map(|v| v.trim().to_owned()).collect(),
    );
    if args.filter {
        names.push("filter".to_owned());
    }

    let flags = names.iter().map(|name| match name.as_str() {
        "list" => quote! { ::ladmin_bootstrap::domain::Units::LIST },
        "quick" => quote! { ::ladmin_bootstrap::domain::Units::QUICK },
        "show" => quote! { ::ladmin_bootstrap::domain::Units::SHOW },
        "form" => quote! { ::ladmin_bootstrap::domain::Units::FORM },
        "filter" => quote! { ::ladmin_bootstrap::domain::Units::FILTER },
        _ => quote! { ::ladmin_bootstrap::domain::Units::ALL_VIEWS },
    });

    quote! { ::ladmin_bootstrap::domain::Units::from_bits_truncate(0 #(| #flags.bits())*) }
}

/// Maps common Rust field types to a field kind; everything else is `Other`.
fn infer_kind(ty: &Type) -> TokenStream {
    if let Type::Reference(reference) = ty {
        return infer_kind(&reference.elem);
    }
    if let Some(inner) = single_generic(ty, "Option") {
        return infer_kind(inner);
    }
    if let Some(inner) = single_generic(ty, "Box") {
        return infer_kind(inner);
    }

    let ident = match ty {
        Type::Path(path) => path.path.segments.last().map(|s| s.ident.to_string()),
        _ => None,
    };

    match ident.as_deref() {
        Some("String" | "str" | "Cow") => quote! { ::ladmin_bootstrap::domain::FieldKind::Text },
        Some("bool") => quote! { ::ladmin_bootstrap::domain::FieldKind::Boolean },
        Some(
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64" | "u128"
            | "usize",
        ) => quote! { ::ladmin_bootstrap::domain::FieldKind::Integer },
        Some("f32" | "f64" | "Decimal") => quote! { ::ladmin_bootstrap::domain::FieldKind::Decimal },
        Some("NaiveDate" | "NaiveDateTime" | "DateTime" | "SystemTime" | "Date") => {
            quote! { ::ladmin_bootstrap::domain::FieldKind::Date }
        },
        _ => quote! { ::ladmin_bootstrap::domain::FieldKind::Other },
    }
}
