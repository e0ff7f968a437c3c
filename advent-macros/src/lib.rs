//! Procedural macros for the advent-framework library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Fields, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro submits a `SolverPlugin` to the inventory, so that
/// `RegistryBuilder::register_all_plugins` finds the solver. The day is taken
/// from the solver's `Solver::DAY`.
///
/// # Attributes
///
/// - `tags`: Optional. Array of string literals for filtering (e.g. `["grouped"]`)
///
/// # Requirements
///
/// The type must be a unit struct implementing the `Solver` trait. If the
/// trait is not implemented, you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_framework::{AutoRegisterSolver, Solver};
///
/// #[derive(AutoRegisterSolver)]
/// #[advent(tags = ["grouped", "parsing"])]
/// pub struct Day01;
///
/// impl Solver for Day01 {
///     // ... implementation
/// }
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(advent))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    match &input.data {
        syn::Data::Struct(data) if matches!(data.fields, Fields::Unit) => {}
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "AutoRegisterSolver can only be derived for unit structs",
            ));
        }
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "AutoRegisterSolver does not support generic solvers",
        ));
    }

    let tags = parse_tags(input)?;

    let expanded = quote! {
        // Compile-time check that the type implements Solver trait
        const _: () = {
            trait MustImplementSolver: ::advent_framework::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::advent_framework::inventory::submit! {
            ::advent_framework::SolverPlugin {
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    };

    Ok(expanded)
}

/// Collect `tags = ["a", "b"]` from every `#[advent(...)]` attribute
fn parse_tags(input: &DeriveInput) -> syn::Result<Vec<String>> {
    let mut tags = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("advent")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tags") {
                let _ = meta.value()?; // Consume the '='
                let content;
                syn::bracketed!(content in meta.input);
                while !content.is_empty() {
                    match content.parse::<Lit>()? {
                        Lit::Str(lit_str) => tags.push(lit_str.value()),
                        other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                    }
                    if content.peek(syn::Token![,]) {
                        let _: syn::Token![,] = content.parse()?;
                    }
                }
                Ok(())
            } else {
                Err(meta.error("unsupported advent attribute, expected `tags`"))
            }
        })?;
    }

    Ok(tags)
}
