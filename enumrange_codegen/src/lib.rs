extern crate proc_macro;

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::parse::EnumDef;

mod parse;

fn generate_enumerable_impl(def: &EnumDef) -> proc_macro2::TokenStream {
    let name = &def.name;
    let repr = &def.repr;
    let first = &def.variants[def.begin];
    let past_last = &def.variants[def.end];
    let name_text = name.to_string();

    let from_repr_arms = def.variants.iter().map(|variant| {
        quote! {
            v if v == #name::#variant as #repr => #name::#variant,
        }
    });

    quote! {
        impl enumrange_core::Enumerable for #name {
            type Repr = #repr;

            const FIRST: Self = #name::#first;
            const PAST_LAST: Self = #name::#past_last;
            const FIRST_RAW: i128 = #name::#first as i128;
            const PAST_LAST_RAW: i128 = #name::#past_last as i128;

            fn to_repr(self) -> #repr {
                self as #repr
            }

            fn from_repr(repr: #repr) -> Self {
                match repr {
                    #(#from_repr_arms)*
                    _ => panic!("no {} variant with value {}", #name_text, repr),
                }
            }
        }
    }
}

/// Derive the range protocol for a unit-variant enum.
///
/// The first declared variant becomes the first label of the range unless
/// another one carries `#[enumerable(begin)]`; the past-the-end sentinel is
/// the variant marked `#[enumerable(end)]`, falling back to a variant named
/// `End`. The underlying integer type is read from `#[repr(..)]` and
/// defaults to `i32`.
#[proc_macro_derive(Enumerable, attributes(enumerable))]
pub fn derive_enumerable(item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item as DeriveInput);

    match parse::parse_enum(&ast) {
        Ok(def) => generate_enumerable_impl(&def).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
