use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that generates a companion `*Timeseries` struct collecting one
/// value per simulated day. All fields in the source struct must be `f64`.
///
/// The generated struct has the same fields as `Vec<f64>` and provides
/// `with_capacity`, `push`, `len`, `is_empty`, `get` and `last`.
///
/// Use `#[timeseries(name = "CustomName")]` to override the default
/// struct name (`{StructName}Timeseries`).
#[proc_macro_derive(Timeseries, attributes(timeseries))]
pub fn derive_timeseries(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let ts_name = extract_timeseries_name(&input)
        .unwrap_or_else(|| format_ident!("{}Timeseries", name));

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Timeseries can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Timeseries can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut field_idents = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(
                &field.ty,
                "Timeseries derive: all fields must be f64",
            )
            .to_compile_error()
            .into();
        }
        field_idents.push(ident);
    }

    let Some(first_field) = field_idents.first() else {
        return syn::Error::new_spanned(name, "Timeseries struct must have at least one field")
            .to_compile_error()
            .into();
    };

    let ts_fields = field_idents.iter().map(|f| {
        quote! { pub #f: Vec<f64> }
    });

    let with_cap_fields = field_idents.iter().map(|f| {
        quote! { #f: Vec::with_capacity(n) }
    });

    let push_fields = field_idents.iter().map(|f| {
        quote! { self.#f.push(row.#f); }
    });

    let get_fields = field_idents.iter().map(|f| {
        quote! { #f: self.#f[day] }
    });

    let expanded = quote! {
        /// Column-oriented series of daily values, one `Vec` per field.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct #ts_name {
            #(#ts_fields,)*
        }

        impl #ts_name {
            /// Pre-allocate all columns for `n` days.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#with_cap_fields,)*
                }
            }

            /// Append one day.
            pub fn push(&mut self, row: &#name) {
                #(#push_fields)*
            }

            /// Number of days stored.
            pub fn len(&self) -> usize {
                self.#first_field.len()
            }

            /// Returns `true` if no days have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first_field.is_empty()
            }

            /// Rebuild the row for `day`, or `None` past the end.
            pub fn get(&self, day: usize) -> Option<#name> {
                if day >= self.len() {
                    return None;
                }
                Some(#name {
                    #(#get_fields,)*
                })
            }

            /// The most recent day, if any.
            pub fn last(&self) -> Option<#name> {
                self.len().checked_sub(1).and_then(|day| self.get(day))
            }
        }
    };

    expanded.into()
}

fn extract_timeseries_name(input: &DeriveInput) -> Option<proc_macro2::Ident> {
    for attr in &input.attrs {
        if !attr.path().is_ident("timeseries") {
            continue;
        }
        let nested = attr
            .parse_args_with(
                syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
            )
            .ok()?;
        for meta in nested {
            let Meta::NameValue(nv) = meta else {
                continue;
            };
            if !nv.path.is_ident("name") {
                continue;
            }
            if let syn::Expr::Lit(expr_lit) = &nv.value {
                if let Lit::Str(lit_str) = &expr_lit.lit {
                    return Some(format_ident!("{}", lit_str.value()));
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
