//! Procedural macros for protokit

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, LitInt, Token};

/// Derive `protokit::ProtobufEnumeration` for a fieldless enum
///
/// Every variant is either mapped to a number with `#[proto(number = N)]` or
/// marked as the single `#[proto(unrecognized)]` sentinel that stands for
/// numbers the enum does not declare.
#[proc_macro_derive(ProtobufEnumeration, attributes(proto))]
pub fn derive_protobuf_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand_enumeration(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(error) => TokenStream::from(error.to_compile_error()),
    }
}

enum Mapping {
    Number(i32),
    Unrecognized,
}

fn expand_enumeration(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "ProtobufEnumeration can only be derived on enums",
            ))
        }
    };

    let mut numbered: Vec<(&Ident, i32)> = Vec::new();
    let mut unrecognized: Option<&Ident> = None;

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "ProtobufEnumeration variants cannot carry data",
            ));
        }

        match variant_mapping(variant)? {
            Mapping::Number(number) => {
                if let Some((other, _)) = numbered.iter().find(|(_, n)| *n == number) {
                    return Err(syn::Error::new_spanned(
                        &variant.ident,
                        format!("number {number} is already used by `{other}`"),
                    ));
                }
                numbered.push((&variant.ident, number));
            }
            Mapping::Unrecognized => {
                if unrecognized.is_some() {
                    return Err(syn::Error::new_spanned(
                        &variant.ident,
                        "only one variant can be #[proto(unrecognized)]",
                    ));
                }
                unrecognized = Some(&variant.ident);
            }
        }
    }

    let unrecognized = unrecognized.ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            "ProtobufEnumeration needs a #[proto(unrecognized)] variant",
        )
    })?;

    let from_arms = numbered.iter().map(|(ident, number)| {
        quote! { #number => Self::#ident, }
    });
    let to_arms = numbered.iter().map(|(ident, number)| {
        quote! { Self::#ident => ::core::option::Option::Some(#number), }
    });

    Ok(quote! {
        impl #impl_generics ::protokit::ProtobufEnumeration for #name #ty_generics #where_clause {
            fn for_number(number: i32) -> Self {
                match number {
                    #(#from_arms)*
                    _ => Self::#unrecognized,
                }
            }

            fn try_number(self) -> ::core::option::Option<i32> {
                match self {
                    #(#to_arms)*
                    Self::#unrecognized => ::core::option::Option::None,
                }
            }
        }
    })
}

fn variant_mapping(variant: &syn::Variant) -> syn::Result<Mapping> {
    let mut mapping = None;

    for attr in variant.attrs.iter().filter(|attr| attr.path().is_ident("proto")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("number") {
                let value = meta.value()?;
                let negative = value.peek(Token![-]);
                if negative {
                    value.parse::<Token![-]>()?;
                }
                let literal: LitInt = value.parse()?;
                let magnitude: i64 = literal.base10_parse()?;
                let number = if negative { -magnitude } else { magnitude };
                let number = i32::try_from(number)
                    .map_err(|_| syn::Error::new_spanned(&literal, "enum number must fit in i32"))?;
                mapping = Some(Mapping::Number(number));
                Ok(())
            } else if meta.path.is_ident("unrecognized") {
                mapping = Some(Mapping::Unrecognized);
                Ok(())
            } else {
                Err(meta.error("expected `number = N` or `unrecognized`"))
            }
        })?;
    }

    mapping.ok_or_else(|| {
        syn::Error::new_spanned(
            &variant.ident,
            "missing #[proto(number = N)] or #[proto(unrecognized)]",
        )
    })
}
