//! Procedural macros for testrail-client
//!
//! This crate provides the `#[resource]` attribute macro for defining writable
//! TestRail models with field-level dirty tracking.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, DeriveInput, Field, GenericArgument, Ident, PathArguments, Type, parse_macro_input,
};

/// Arguments for the `#[resource]` attribute
#[derive(Debug, FromMeta)]
struct ResourceArgs {
    /// Resource kind used in messages (e.g., "case")
    kind: String,
}

/// How a field takes part in writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRole {
    /// Assignable and transmitted when dirty
    Writable,
    /// Writable, holding `Vec<R>` of nested resources serialized through their own records
    Nested,
    /// Addresses the resource in the request path; never transmitted
    Identity,
    /// Populated by the server only
    ReadOnly,
}

const MARKERS: &[&str] = &["identity", "read_only", "nested"];

/// Types whose getters return the value instead of a reference
const COPY_TYPES: &[&str] = &[
    "u8", "u16", "u32", "u64", "i8", "i16", "i32", "i64", "f32", "f64", "bool", "Timestamp",
];

/// Attribute macro for writable TestRail resources.
///
/// Every field must be an `Option<T>`. The macro generates:
/// - `#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]`
/// - a hidden dirty-field record, skipped by serde so hydrated models start clean
/// - a getter per field, plus `set_*`, `with_*` and `clear_*` for writable fields
///   and `with_*` for identity fields
/// - the `Resource` trait implementation, serializing only dirty fields
///
/// Field markers: `#[identity]`, `#[read_only]`, `#[nested]`.
///
/// # Example
///
/// ```ignore
/// #[resource(kind = "section")]
/// pub struct Section {
///     #[identity]
///     id: Option<u64>,
///     name: Option<String>,
///     #[read_only]
///     depth: Option<u32>,
/// }
///
/// let section = Section::default().with_id(7).with_name("Smoke");
/// ```
#[proc_macro_attribute]
pub fn resource(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr_args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    let args = match ResourceArgs::from_list(&attr_args) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let input = parse_macro_input!(item as DeriveInput);
    let expanded = impl_resource(&args, input);

    TokenStream::from(expanded)
}

fn impl_resource(args: &ResourceArgs, input: DeriveInput) -> TokenStream2 {
    let struct_name = &input.ident;
    let kind = &args.kind;
    let vis = &input.vis;
    let attrs = &input.attrs;

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "resource does not support generics")
            .to_compile_error();
    }

    let fields = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "resource only supports structs with named fields",
                )
                .to_compile_error();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "resource only supports structs")
                .to_compile_error();
        }
    };

    let mut struct_fields = Vec::new();
    let mut accessors = Vec::new();
    let mut writable_names = Vec::new();
    let mut payload_inserts = Vec::new();

    for field in fields {
        let role = match field_role(&field.attrs) {
            Ok(role) => role,
            Err(e) => return e.to_compile_error(),
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(inner) = option_inner(&field.ty) else {
            return syn::Error::new_spanned(&field.ty, "resource fields must be Option<T>")
                .to_compile_error();
        };
        if role == FieldRole::Nested && vec_inner(inner).is_none() {
            return syn::Error::new_spanned(&field.ty, "#[nested] fields must be Option<Vec<R>>")
                .to_compile_error();
        }

        struct_fields.push(strip_markers(field));
        accessors.push(getter(ident, inner));

        let name = ident.to_string();
        match role {
            FieldRole::Writable | FieldRole::Nested => {
                accessors.push(mutators(ident, inner, &name));
                writable_names.push(name.clone());
                payload_inserts.push(payload_insert(ident, &name, role));
            }
            FieldRole::Identity => {
                let with = format_ident!("with_{}", ident);
                accessors.push(quote! {
                    /// Set the identifier used to address this resource (never transmitted).
                    pub fn #with(mut self, value: impl Into<#inner>) -> Self {
                        self.#ident = Some(value.into());
                        self
                    }
                });
            }
            FieldRole::ReadOnly => {}
        }
    }

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #vis struct #struct_name {
            #(#struct_fields,)*
            #[serde(skip)]
            __dirty: crate::tracking::DirtyFields,
        }

        impl #struct_name {
            #(#accessors)*
        }

        impl crate::tracking::Resource for #struct_name {
            const KIND: &'static str = #kind;

            const WRITABLE_FIELDS: &'static [&'static str] = &[#(#writable_names),*];

            fn dirty_fields(&self) -> &crate::tracking::DirtyFields {
                &self.__dirty
            }

            fn dirty_fields_mut(&mut self) -> &mut crate::tracking::DirtyFields {
                &mut self.__dirty
            }

            fn write_payload(
                &self,
            ) -> serde_json::Result<serde_json::Map<String, serde_json::Value>> {
                let mut payload = serde_json::Map::new();
                #(#payload_inserts)*
                Ok(payload)
            }
        }
    }
}

fn field_role(attrs: &[Attribute]) -> syn::Result<FieldRole> {
    let mut role = FieldRole::Writable;
    for attr in attrs {
        let next = if attr.path().is_ident("identity") {
            FieldRole::Identity
        } else if attr.path().is_ident("read_only") {
            FieldRole::ReadOnly
        } else if attr.path().is_ident("nested") {
            FieldRole::Nested
        } else {
            continue;
        };
        if role != FieldRole::Writable {
            return Err(syn::Error::new_spanned(
                attr,
                "only one of #[identity], #[read_only], #[nested] is allowed",
            ));
        }
        role = next;
    }
    Ok(role)
}

/// Re-emit a field without our marker attributes, omitting `None` when serialized.
fn strip_markers(field: &Field) -> TokenStream2 {
    let mut field = field.clone();
    field
        .attrs
        .retain(|attr| !MARKERS.iter().any(|marker| attr.path().is_ident(marker)));
    quote! {
        #[serde(skip_serializing_if = "Option::is_none")]
        #field
    }
}

fn getter(ident: &Ident, inner: &Type) -> TokenStream2 {
    if is_named(inner, "String") {
        quote! {
            pub fn #ident(&self) -> Option<&str> {
                self.#ident.as_deref()
            }
        }
    } else if let Some(element) = vec_inner(inner) {
        quote! {
            pub fn #ident(&self) -> Option<&[#element]> {
                self.#ident.as_deref()
            }
        }
    } else if COPY_TYPES.iter().any(|name| is_named(inner, name)) {
        quote! {
            pub fn #ident(&self) -> Option<#inner> {
                self.#ident
            }
        }
    } else {
        quote! {
            pub fn #ident(&self) -> Option<&#inner> {
                self.#ident.as_ref()
            }
        }
    }
}

fn mutators(ident: &Ident, inner: &Type, name: &str) -> TokenStream2 {
    let set = format_ident!("set_{}", ident);
    let with = format_ident!("with_{}", ident);
    let clear = format_ident!("clear_{}", ident);

    quote! {
        pub fn #set(&mut self, value: impl Into<#inner>) -> &mut Self {
            self.#ident = Some(value.into());
            self.__dirty.mark(#name);
            self
        }

        pub fn #with(mut self, value: impl Into<#inner>) -> Self {
            self.#set(value);
            self
        }

        /// Explicitly clear the field; it is still transmitted, as `null`.
        pub fn #clear(&mut self) -> &mut Self {
            self.#ident = None;
            self.__dirty.mark(#name);
            self
        }
    }
}

fn payload_insert(ident: &Ident, name: &str, role: FieldRole) -> TokenStream2 {
    let value = if role == FieldRole::Nested {
        quote! {
            match &self.#ident {
                Some(items) => crate::tracking::nested_payload(items)?,
                None => serde_json::Value::Null,
            }
        }
    } else {
        quote! { serde_json::to_value(&self.#ident)? }
    };

    quote! {
        if self.__dirty.contains(#name) {
            payload.insert(#name.to_owned(), #value);
        }
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    generic_inner(ty, "Option")
}

fn vec_inner(ty: &Type) -> Option<&Type> {
    generic_inner(ty, "Vec")
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

fn is_named(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == name && segment.arguments.is_none()),
        _ => false,
    }
}
